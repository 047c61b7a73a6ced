//! Strict decoding of config server responses.

use serde_json::Value;

use crate::client::document::ConfigDocument;
use crate::client::types::DecodeError;

/// Decode a response body into a [`ConfigDocument`].
///
/// A top-level `null` decodes to an empty document. Any other non-object
/// value, invalid JSON, or a field with the wrong type is an error.
pub fn decode(body: &[u8]) -> Result<ConfigDocument, DecodeError> {
    let value: Value = serde_json::from_slice(body).map_err(DecodeError::Syntax)?;

    match value {
        Value::Null => Ok(ConfigDocument::default()),
        Value::Object(_) => serde_json::from_value(value).map_err(DecodeError::Shape),
        other => Err(DecodeError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
