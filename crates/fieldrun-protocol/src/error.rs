//! Protocol-level error types.

use fieldrun_types::{DiagnosticError, ErrorKind, FieldrunError};
use thiserror::Error;

/// Errors raised while decoding an invocation document.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("malformed input: {reason}")]
    Malformed { reason: String },
    /// A required top-level field is absent.
    #[error("missing field: {field}")]
    MissingField { field: &'static str },
}

impl ProtocolError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<ProtocolError> for FieldrunError {
    fn from(e: ProtocolError) -> Self {
        FieldrunError::new(ErrorKind::InvalidInput, e.to_string())
    }
}

impl DiagnosticError for ProtocolError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::Malformed { .. } => {
                Some("The request document could not be decoded as an invocation.".into())
            }
            Self::MissingField { field } => {
                Some(format!("The request document has no '{field}' field."))
            }
        }
    }

    fn fix(&self) -> Option<String> {
        Some(
            "Write a document of the form \
             {\"resolver\": \"Type.field\", \"args\": {}, \"parent\": {}}"
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display_names_field() {
        let e = ProtocolError::MissingField { field: "args" };
        assert_eq!(e.to_string(), "missing field: args");
    }

    #[test]
    fn converts_to_invalid_input() {
        let err: FieldrunError = ProtocolError::malformed("eof").into();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
        assert!(err.message.contains("eof"));
    }

    #[test]
    fn missing_field_hint_mentions_field() {
        let e = ProtocolError::MissingField { field: "resolver" };
        assert!(e.hint().expect("hint").contains("resolver"));
        assert!(e.fix().expect("fix").contains("Type.field"));
    }
}
