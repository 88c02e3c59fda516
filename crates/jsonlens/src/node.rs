//! The `JsonNode` tagged union and its `serde_json` input boundary.
//!
//! A `JsonNode` is an immutable, already-parsed JSON value. Unlike
//! `serde_json::Value` it keeps 32-bit and 64-bit integers as distinct
//! variants, because the accessors in [`crate::access`] perform strict
//! kind checks rather than coercive conversions. Objects are stored as
//! `Vec<(String, JsonNode)>` to keep insertion order (and any duplicate
//! field names the source tree carried) without extra dependencies.
//!
//! "Absent" is not a variant: the accessor API takes `Option<&JsonNode>`,
//! so a missing node is `None` and a parsed JSON `null` is
//! `Some(&JsonNode::Null)`. The two are never conflated.

use serde_json::Value;

/// Ordered field pairs of a JSON object.
pub type JsonObject = Vec<(String, JsonNode)>;

/// Elements of a JSON array.
pub type JsonArray = Vec<JsonNode>;

/// A parsed JSON value, tagged with its variant.
///
/// The numeric kind (`Int` vs `Long` vs `Float`) is fixed when the node is
/// built and never re-derived from value range at query time.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNode {
    Null,
    Bool(bool),
    /// A number stored as a 32-bit integer.
    Int(i32),
    /// A number stored as a 64-bit integer that does not fit 32 bits.
    Long(i64),
    /// Any other number: fractional, exponent-form, or beyond 64-bit range.
    Float(f64),
    String(String),
    Array(JsonArray),
    /// Key-value pairs in insertion order.
    Object(JsonObject),
}

impl JsonNode {
    /// Human-readable variant name, used in conversion error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonNode::Null => "null",
            JsonNode::Bool(_) => "boolean",
            JsonNode::Int(_) => "integer",
            JsonNode::Long(_) => "long",
            JsonNode::Float(_) => "float",
            JsonNode::String(_) => "string",
            JsonNode::Array(_) => "array",
            JsonNode::Object(_) => "object",
        }
    }
}

/// Build a `JsonNode` from a tree produced by the external parser.
///
/// Numeric kinds are assigned the way a sizing parser tags them: an integer
/// that fits `i32` becomes [`JsonNode::Int`], a wider one becomes
/// [`JsonNode::Long`], and everything else numeric (fractions, unsigned
/// values above `i64::MAX`) becomes [`JsonNode::Float`]. Object field order
/// is preserved via `serde_json`'s `preserve_order` feature.
impl From<Value> for JsonNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonNode::Null,
            Value::Bool(b) => JsonNode::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    match i32::try_from(i) {
                        Ok(small) => JsonNode::Int(small),
                        Err(_) => JsonNode::Long(i),
                    }
                } else {
                    // Fractional, or a u64 beyond i64::MAX. as_f64 is total
                    // for any Number serde_json can parse.
                    JsonNode::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => JsonNode::String(s),
            Value::Array(arr) => JsonNode::Array(arr.into_iter().map(JsonNode::from).collect()),
            Value::Object(map) => JsonNode::Object(
                map.into_iter()
                    .map(|(key, child)| (key, JsonNode::from(child)))
                    .collect(),
            ),
        }
    }
}
