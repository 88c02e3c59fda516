//! Null-safe projection functions over [`JsonNode`].
//!
//! Every function here is pure and total. The uniform contract is
//! absent-in ⇒ absent-out and type-mismatch ⇒ absent-out; nothing in this
//! module panics or returns an error. The single `Result`-bearing entry
//! point, [`to_generic_map`], only forwards failures produced by the
//! injected [`DynamicConverter`].
//!
//! # Examples
//!
//! ```
//! use jsonlens::{as_bool, as_object, JsonNode};
//! use serde_json::json;
//!
//! let node = JsonNode::from(json!({"active": false}));
//! let fields = as_object(Some(&node)).unwrap();
//! assert_eq!(fields.len(), 1);
//!
//! // false is a present value, distinct from absent.
//! assert_eq!(as_bool(Some(&fields[0].1)), Some(false));
//! assert_eq!(as_bool(None), None);
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::convert::DynamicConverter;
use crate::error::Result;
use crate::node::{JsonArray, JsonNode, JsonObject};

/// Borrow the node's fields iff it is an object. No copy is made.
pub fn as_object(node: Option<&JsonNode>) -> Option<&JsonObject> {
    match node {
        Some(JsonNode::Object(fields)) => Some(fields),
        _ => None,
    }
}

/// Borrow the node's elements iff it is an array. No copy is made.
pub fn as_array(node: Option<&JsonNode>) -> Option<&JsonArray> {
    match node {
        Some(JsonNode::Array(elements)) => Some(elements),
        _ => None,
    }
}

/// The exact text iff the node is a string variant. A number or boolean is
/// not string-convertible here; it yields `None`.
pub fn as_str(node: Option<&JsonNode>) -> Option<&str> {
    match node {
        Some(JsonNode::String(text)) => Some(text),
        _ => None,
    }
}

/// The boolean value iff the node is a boolean variant.
pub fn as_bool(node: Option<&JsonNode>) -> Option<bool> {
    match node {
        Some(JsonNode::Bool(flag)) => Some(*flag),
        _ => None,
    }
}

/// The value iff the node was stored as a 64-bit integer.
///
/// Strict kind check: a node holding a 32-bit integer does not match, even
/// though its value would fit an `i64`. Use [`as_int`] for that kind.
pub fn as_long(node: Option<&JsonNode>) -> Option<i64> {
    match node {
        Some(JsonNode::Long(n)) => Some(*n),
        _ => None,
    }
}

/// The value iff the node was stored as a 32-bit integer.
///
/// Symmetric with [`as_long`]: a 64-bit node yields `None` here.
pub fn as_int(node: Option<&JsonNode>) -> Option<i32> {
    match node {
        Some(JsonNode::Int(n)) => Some(*n),
        _ => None,
    }
}

/// Materialize the direct fields of an object node into a fresh map of raw
/// child nodes. Does not recurse into nested structures.
///
/// Returns `None` only for an absent input. A present non-object node has no
/// fields and yields an empty map; the input is assumed to be object-shaped
/// by the caller, so a mismatch there is not signalled separately. Duplicate
/// field names in the source resolve last-write-wins, matching the underlying
/// tree collaborator's own duplicate-key policy.
pub fn entries_as_map(node: Option<&JsonNode>) -> Option<HashMap<&str, &JsonNode>> {
    let node = node?;
    let mut map = HashMap::new();
    if let JsonNode::Object(fields) = node {
        for (key, child) in fields {
            map.insert(key.as_str(), child);
        }
    }
    Some(map)
}

/// Convert an object node into a mapping of fully dynamic values by
/// delegating to the injected converter.
///
/// An absent input short-circuits to `Ok(None)` before the collaborator is
/// ever invoked. For a present node the converter does all the work, and any
/// error it raises surfaces unchanged; this function neither catches nor
/// wraps collaborator failures.
pub fn to_generic_map<C>(
    converter: &C,
    node: Option<&JsonNode>,
) -> Result<Option<Map<String, Value>>>
where
    C: DynamicConverter + ?Sized,
{
    match node {
        Some(node) => converter.convert_map(node).map(Some),
        None => Ok(None),
    }
}
