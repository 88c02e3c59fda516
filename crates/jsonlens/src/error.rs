//! Error types for the dynamic conversion path.

use thiserror::Error;

/// Errors raised by a [`crate::DynamicConverter`] when a node cannot be
/// materialized as a dynamic value.
///
/// The projection functions in [`crate::access`] never produce these; a
/// mismatched or absent node is `None`, not an error.
#[derive(Error, Debug, PartialEq)]
pub enum ConvertError {
    /// A float with no JSON representation (NaN or infinity).
    #[error("cannot represent {value} as a JSON number")]
    NonFiniteNumber { value: f64 },

    /// A map conversion was requested for a node that is not an object.
    #[error("expected an object, found {kind}")]
    NotAnObject { kind: &'static str },
}

/// Convenience alias used throughout jsonlens.
pub type Result<T> = std::result::Result<T, ConvertError>;
