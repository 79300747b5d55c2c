//! Resource tags.
//!
//! MediaLive resources take their tags as a JSON object. Each tag remembers
//! the priority it was last written with; a set or removal with a lower
//! priority than the current one is ignored.

use std::collections::{BTreeMap, HashMap};

use medialive_core::{Canonical, CanonicalMap};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

/// Priority of tags supplied when the resource is defined.
pub const INITIAL_TAG_PRIORITY: u32 = 50;

/// Priority of [`TagManager::set_tag`] and [`TagManager::remove_tag`].
pub const DEFAULT_TAG_PRIORITY: u32 = 100;

/// Mutable tag collection of one resource.
#[derive(Debug, Clone, Default)]
pub struct TagManager {
    resource_type: &'static str,
    tags: BTreeMap<String, String>,
    priorities: HashMap<String, u32>,
}

impl TagManager {
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            ..Default::default()
        }
    }

    /// Resource type the tags are rendered for.
    pub fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set_tag_with_priority(key, value, DEFAULT_TAG_PRIORITY);
    }

    /// Set a tag unless it was last written with a higher priority.
    pub fn set_tag_with_priority(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        priority: u32,
    ) {
        let key = key.into();
        if priority < self.priority_of(&key) {
            debug!("Ignoring tag '{}' on {}: lower priority", key, self.resource_type);
            return;
        }

        let value = value.into();
        debug!("Set tag '{}'='{}' on {}", key, value, self.resource_type);
        self.priorities.insert(key.clone(), priority);
        self.tags.insert(key, value);
    }

    pub fn remove_tag(&mut self, key: &str) {
        self.remove_tag_with_priority(key, DEFAULT_TAG_PRIORITY);
    }

    /// Remove a tag unless it was last written with a higher priority.
    pub fn remove_tag_with_priority(&mut self, key: &str, priority: u32) {
        if priority < self.priority_of(key) {
            return;
        }

        self.priorities.insert(key.to_string(), priority);
        if self.tags.remove(key).is_some() {
            debug!("Removed tag '{}' from {}", key, self.resource_type);
        }
    }

    fn priority_of(&self, key: &str) -> u32 {
        self.priorities.get(key).copied().unwrap_or(0)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Current tags, sorted by key.
    pub fn tag_values(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Canonical form of the tags, sorted by key; `None` when there are none.
    pub fn render(&self) -> Option<CanonicalMap> {
        if self.tags.is_empty() {
            return None;
        }
        Some(
            self.tags
                .iter()
                .map(|(key, value)| (key.clone(), Canonical::String(value.clone())))
                .collect(),
        )
    }

    /// JSON object of the tags as the template carries it.
    pub fn render_json(&self) -> Option<JsonValue> {
        if self.tags.is_empty() {
            return None;
        }
        Some(JsonValue::Object(
            self.tags
                .iter()
                .map(|(key, value)| (key.clone(), JsonValue::String(value.clone())))
                .collect::<JsonMap<_, _>>(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_priority_does_not_override() {
        let mut tags = TagManager::new("AWS::MediaLive::Channel");
        tags.set_tag_with_priority("team", "video", 200);
        tags.set_tag("team", "ops");
        assert_eq!(tags.get("team"), Some("video"));

        tags.remove_tag("team");
        assert_eq!(tags.get("team"), Some("video"));

        tags.remove_tag_with_priority("team", 200);
        assert!(tags.get("team").is_none());
    }

    #[test]
    fn test_removal_blocks_lower_priority_set() {
        let mut tags = TagManager::new("AWS::MediaLive::Input");
        tags.remove_tag("env");
        tags.set_tag_with_priority("env", "prod", INITIAL_TAG_PRIORITY);

        assert!(tags.is_empty());
        assert!(tags.render().is_none());
    }

    #[test]
    fn test_render_is_sorted_by_key() {
        let mut tags = TagManager::new("AWS::MediaLive::Input");
        tags.set_tag("zone", "a");
        tags.set_tag("app", "live");

        let keys: Vec<_> = tags.render().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["app", "zone"]);
        assert_eq!(
            tags.render_json().unwrap(),
            serde_json::json!({ "app": "live", "zone": "a" })
        );
    }
}
