//! Parent scopes resources register with.

use std::sync::OnceLock;

use indexmap::IndexMap;
use parking_lot::Mutex;
use regex::Regex;
use tracing::debug;

use crate::error::ScopeError;

/// Parent construct a resource is defined in.
///
/// Resources only forward their registration; uniqueness and naming rules
/// belong to the scope.
pub trait Scope: Send + Sync {
    /// Construct path of the scope, e.g. `LiveStack`.
    fn path(&self) -> String;

    /// Claim `logical_id` for a resource of the given type.
    fn register(&self, logical_id: &str, resource_type: &str) -> Result<(), ScopeError>;
}

fn logical_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9]{1,255}$").expect("logical id pattern is valid"))
}

/// A stack: the reference [`Scope`] that keeps one entry per logical id.
#[derive(Debug)]
pub struct Stack {
    name: String,
    resources: Mutex<IndexMap<String, String>>,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Mutex::new(IndexMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered logical ids, in registration order.
    pub fn logical_ids(&self) -> Vec<String> {
        self.resources.lock().keys().cloned().collect()
    }

    /// Type of the resource registered under `logical_id`.
    pub fn resource_type(&self, logical_id: &str) -> Option<String> {
        self.resources.lock().get(logical_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.resources.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.lock().is_empty()
    }
}

impl Scope for Stack {
    fn path(&self) -> String {
        self.name.clone()
    }

    fn register(&self, logical_id: &str, resource_type: &str) -> Result<(), ScopeError> {
        if !logical_id_pattern().is_match(logical_id) {
            return Err(ScopeError::InvalidLogicalId(logical_id.to_string()));
        }

        let mut resources = self.resources.lock();
        if resources.contains_key(logical_id) {
            return Err(ScopeError::IdentityConflict {
                path: self.name.clone(),
                logical_id: logical_id.to_string(),
            });
        }

        resources.insert(logical_id.to_string(), resource_type.to_string());
        debug!("Registered {} '{}' in {}", resource_type, logical_id, self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_duplicates() {
        let stack = Stack::new("LiveStack");
        stack.register("Channel", "AWS::MediaLive::Channel").unwrap();

        let err = stack.register("Channel", "AWS::MediaLive::Input").unwrap_err();
        assert_eq!(
            err,
            ScopeError::IdentityConflict {
                path: "LiveStack".to_string(),
                logical_id: "Channel".to_string(),
            }
        );
        assert_eq!(
            stack.resource_type("Channel").as_deref(),
            Some("AWS::MediaLive::Channel")
        );
    }

    #[test]
    fn test_register_validates_logical_id() {
        let stack = Stack::new("LiveStack");

        assert!(matches!(
            stack.register("my-channel", "AWS::MediaLive::Channel"),
            Err(ScopeError::InvalidLogicalId(_))
        ));
        assert!(matches!(
            stack.register("", "AWS::MediaLive::Channel"),
            Err(ScopeError::InvalidLogicalId(_))
        ));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_logical_ids_keep_order() {
        let stack = Stack::new("LiveStack");
        stack.register("Input2", "AWS::MediaLive::Input").unwrap();
        stack.register("Input1", "AWS::MediaLive::Input").unwrap();

        assert_eq!(stack.logical_ids(), vec!["Input2", "Input1"]);
        assert_eq!(stack.len(), 2);
    }
}
