//! The dynamic-conversion collaborator.
//!
//! Full recursive conversion of a [`JsonNode`] tree into dynamic values is
//! deliberately kept out of the projection functions: it is an injected
//! capability behind the [`DynamicConverter`] trait, so callers can swap the
//! facility that walks the tree without touching the accessor contract.
//! [`JsonConverter`] is the default implementation, materializing into
//! `serde_json::Value`.

use serde_json::{Map, Number, Value};

use crate::error::{ConvertError, Result};
use crate::node::JsonNode;

/// Converts a node tree into a fully dynamic representation.
pub trait DynamicConverter {
    /// Convert a node into a dynamic value, recursing through nested
    /// structures. May fail for values the dynamic representation cannot
    /// express; such failures propagate to the caller unmodified.
    fn convert(&self, node: &JsonNode) -> Result<Value>;

    /// Convert a node expected to be an object into a string-keyed map of
    /// dynamic values. Rejects anything that does not convert to an object.
    fn convert_map(&self, node: &JsonNode) -> Result<Map<String, Value>> {
        match self.convert(node)? {
            Value::Object(map) => Ok(map),
            _ => Err(ConvertError::NotAnObject { kind: node.kind() }),
        }
    }
}

/// Default converter: materializes a node tree as `serde_json::Value`.
///
/// Objects become `serde_json::Map` (duplicate field names resolve
/// last-write-wins, like `serde_json`'s own parser), arrays become vectors,
/// and primitives become plain JSON scalars with no residual node wrappers.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonConverter;

impl DynamicConverter for JsonConverter {
    fn convert(&self, node: &JsonNode) -> Result<Value> {
        let value = match node {
            JsonNode::Null => Value::Null,
            JsonNode::Bool(flag) => Value::Bool(*flag),
            JsonNode::Int(n) => Value::Number(Number::from(i64::from(*n))),
            JsonNode::Long(n) => Value::Number(Number::from(*n)),
            JsonNode::Float(f) => {
                let number = Number::from_f64(*f)
                    .ok_or(ConvertError::NonFiniteNumber { value: *f })?;
                Value::Number(number)
            }
            JsonNode::String(text) => Value::String(text.clone()),
            JsonNode::Array(elements) => {
                let mut converted = Vec::with_capacity(elements.len());
                for element in elements {
                    converted.push(self.convert(element)?);
                }
                Value::Array(converted)
            }
            JsonNode::Object(fields) => {
                let mut map = Map::new();
                for (key, child) in fields {
                    map.insert(key.clone(), self.convert(child)?);
                }
                Value::Object(map)
            }
        };
        Ok(value)
    }
}
