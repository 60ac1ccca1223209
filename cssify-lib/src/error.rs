//! Error types shared by the stringifiers.

use serde_json::Value;
use thiserror::Error;

/// Result type for stringify operations
pub type Result<T> = std::result::Result<T, StyleError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The top-level argument of a stringifier was not a JSON object.
    #[error("[{context}]: Expected '{argument}' to be a non-null object, but received {received} (type:{type_tag}).")]
    InvalidInputType {
        context: &'static str,
        argument: &'static str,
        received: String,
        type_tag: &'static str,
    },

    /// A leaf value handed to the unit resolver was neither a string nor a number.
    #[error("Invalid input: value of '{property}' must be string or number, but received {type_tag}.")]
    InvalidValueType {
        property: String,
        type_tag: &'static str,
    },
}

impl StyleError {
    pub(crate) fn invalid_input(
        context: &'static str,
        argument: &'static str,
        value: &Value,
    ) -> Self {
        StyleError::InvalidInputType {
            context,
            argument,
            received: display_value(value),
            type_tag: type_tag(value),
        }
    }

    pub(crate) fn invalid_value(property: &str, value: &Value) -> Self {
        StyleError::InvalidValueType {
            property: property.to_string(),
            type_tag: type_tag(value),
        }
    }
}

/// Runtime type name of a JSON value.
pub fn type_tag(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Strings print bare, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Checks that `value` is an object and hands back its map.
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    context: &'static str,
    argument: &'static str,
) -> Result<&'a serde_json::Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| StyleError::invalid_input(context, argument, value))
}
