//! Invocation result document.

use serde_json::{Map, Value};

use crate::error::ProtocolError;

/// The value a resolver produced, ready to be persisted.
///
/// Absent and `null` outputs are normalized to an empty object so the host
/// always reads a document.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResult(Value);

impl InvocationResult {
    /// Normalizes a resolver output.
    pub fn from_output(output: Option<Value>) -> Self {
        match output {
            None | Some(Value::Null) => Self::empty(),
            Some(value) => Self(value),
        }
    }

    /// The `{}` result.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Decodes a result document written by a resolver process.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ProtocolError> {
        serde_json::from_slice(bytes)
            .map(Self)
            .map_err(|e| ProtocolError::Malformed {
                reason: format!("invalid result document: {e}"),
            })
    }

    /// Encodes the whole document before anything is written.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.0)
    }

    /// Borrows the result value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the result, returning its value.
    pub fn into_value(self) -> Value {
        self.0
    }
}
