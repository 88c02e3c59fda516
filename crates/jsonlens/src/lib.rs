//! # jsonlens
//!
//! Null-safe, typed projections over an already-parsed JSON tree.
//!
//! Every accessor in this crate is total: given an absent node or a node of
//! the wrong variant it returns `None` instead of panicking or raising an
//! error. The one place a failure can surface is the dynamic conversion path
//! ([`to_generic_map`]), and there the error always originates in the injected
//! [`DynamicConverter`] collaborator, never in this crate's own projection
//! logic.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonlens::{as_str, as_int, as_long, JsonNode};
//! use serde_json::json;
//!
//! let node = JsonNode::from(json!({"name": "Alice", "age": 30}));
//! let fields = jsonlens::entries_as_map(Some(&node)).unwrap();
//!
//! assert_eq!(as_str(fields.get("name").copied()), Some("Alice"));
//! assert_eq!(as_int(fields.get("age").copied()), Some(30));
//! // Strict kind check: 30 was stored as a 32-bit integer, so the
//! // 64-bit accessor does not match it.
//! assert_eq!(as_long(fields.get("age").copied()), None);
//! assert_eq!(as_str(fields.get("missing").copied()), None);
//! ```
//!
//! ## Modules
//!
//! - [`node`] — the `JsonNode` tagged union and its `serde_json` boundary
//! - [`access`] — the projection functions (`as_object`, `as_str`, …)
//! - [`convert`] — the injected dynamic-conversion collaborator
//! - [`error`] — error types for the conversion path

pub mod access;
pub mod convert;
pub mod error;
pub mod node;

pub use access::{
    as_array, as_bool, as_int, as_long, as_object, as_str, entries_as_map, to_generic_map,
};
pub use convert::{DynamicConverter, JsonConverter};
pub use error::ConvertError;
pub use node::{JsonArray, JsonNode, JsonObject};
