//! # medialive_core
//!
//! Record runtime shared by every MediaLive construct.
//!
//! This crate owns the value-object protocol of the property records:
//! construction with structural checks, deep equality, the debug
//! representation, and the projection to the canonical (camelCase) property
//! map that the host framework consumes at synthesis.
//!
//! ## Features
//!
//! - **Schemas**: static per-kind name tables ([`RecordSchema`])
//! - **Records**: one shared implementation parameterized by the schema ([`Record`])
//! - **Typed facades**: generated per kind by [`define_records!`]
//! - **Deferred values**: opaque markers passed through untouched ([`Deferred`])
//! - **Projection**: order-preserving canonical maps ([`CanonicalMap`])
//! - **Documents**: records read from wire-named JSON ([`Record::from_document`])
//!
//! ## Example
//!
//! ```rust
//! use medialive_core::{Record, ShapeError, Value};
//!
//! medialive_core::define_records! {
//!     namespace = "Example::Service::Thing";
//!     index = SCHEMAS;
//!
//!     Codec {
//!         bitrate: Double => "bitrate",
//!         coding_mode: String => "codingMode",
//!     }
//! }
//!
//! let codec = Codec::new().with_bitrate(96000).with_coding_mode("CODING_MODE_2_0");
//! assert_eq!(codec.to_canonical()["codingMode"], medialive_core::Canonical::String("CODING_MODE_2_0".into()));
//!
//! let err = Record::from_bindings(Codec::schema(), [("bogusField", Value::from(1))]).unwrap_err();
//! assert!(matches!(err, ShapeError::UnknownField { .. }));
//! ```

pub mod canonical;
pub mod deferred;
pub mod document;
pub mod error;
pub mod macros;
pub mod record;
pub mod schema;
pub mod value;

pub use canonical::{map_to_json, Canonical, CanonicalMap};
pub use deferred::{Deferred, Intrinsic, Resolvable};
pub use error::{ShapeError, ShapeResult};
pub use record::{Record, RecordType};
pub use schema::{pascal_case, Element, FieldSpec, RecordSchema, ScalarType, SchemaRef, Shape};
pub use value::{IntoValue, Number, OrDeferred, Value};

#[doc(hidden)]
pub use paste;
