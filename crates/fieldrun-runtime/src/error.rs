//! Runtime error types.

use fieldrun_protocol::ProtocolError;
use fieldrun_types::{DiagnosticError, ErrorKind, FieldrunError};
use thiserror::Error;

use crate::io::TransportError;
use crate::resolver::ResolverError;

/// Terminal outcome of a failed invocation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request could not be read or decoded.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
    /// A required top-level request field is absent.
    #[error("missing field: {field}")]
    MissingField { field: &'static str },
    /// No resolver registered for the requested type and field.
    #[error("resolver not found: {type_name}.{field_name}")]
    ResolverNotFound {
        type_name: String,
        field_name: String,
    },
    /// The resolver itself failed.
    #[error("resolver '{resolver}' failed: {source}")]
    ResolverExecution {
        resolver: String,
        #[source]
        source: ResolverError,
    },
    /// The result could not be persisted.
    #[error("failed to write output: {reason}")]
    OutputWrite { reason: String },
}

impl From<ProtocolError> for DispatchError {
    fn from(e: ProtocolError) -> Self {
        match e {
            ProtocolError::Malformed { reason } => Self::MalformedInput { reason },
            ProtocolError::MissingField { field } => Self::MissingField { field },
        }
    }
}

impl From<TransportError> for DispatchError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Read { .. } => Self::MalformedInput {
                reason: e.to_string(),
            },
            TransportError::Write { .. } => Self::OutputWrite {
                reason: e.to_string(),
            },
        }
    }
}

impl From<DispatchError> for FieldrunError {
    fn from(e: DispatchError) -> Self {
        let kind = match &e {
            DispatchError::MalformedInput { .. } | DispatchError::MissingField { .. } => {
                ErrorKind::InvalidInput
            }
            DispatchError::ResolverNotFound { .. } => ErrorKind::NotFound,
            DispatchError::ResolverExecution { .. } => ErrorKind::Internal,
            DispatchError::OutputWrite { .. } => ErrorKind::Io,
        };
        FieldrunError::new(kind, e.to_string())
    }
}

impl DiagnosticError for DispatchError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::MalformedInput { .. } => Some(
                "The request document is missing, unreadable, or not an invocation object."
                    .into(),
            ),
            Self::MissingField { field } => {
                Some(format!("The request document has no '{field}' field."))
            }
            Self::ResolverNotFound {
                type_name,
                field_name,
            } => Some(format!(
                "No resolver is registered for field '{field_name}' of type '{type_name}'."
            )),
            Self::ResolverExecution { resolver, .. } => {
                Some(format!("The '{resolver}' resolver returned an error."))
            }
            Self::OutputWrite { .. } => {
                Some("The result document could not be written.".into())
            }
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::MalformedInput { .. } | Self::MissingField { .. } => Some(
                "Check the input document: {\"resolver\": \"Type.field\", \"args\": {}}".into(),
            ),
            Self::ResolverNotFound { .. } => Some(
                "Register the resolver on startup, or list registered ones with: fieldrun list"
                    .into(),
            ),
            Self::ResolverExecution { .. } => None,
            Self::OutputWrite { .. } => Some(
                "Make sure the output directory exists and is writable (io.output_path)."
                    .into(),
            ),
        }
    }
}

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two resolvers were registered for the same key.
    #[error("duplicate resolver: {key}")]
    DuplicateResolver { key: String },
    /// The type or field name is not usable as a key.
    #[error("invalid resolver key: {0}")]
    InvalidKey(#[from] FieldrunError),
}

impl From<RegistryError> for FieldrunError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::DuplicateResolver { .. } => {
                FieldrunError::new(ErrorKind::Conflict, e.to_string())
            }
            RegistryError::InvalidKey(inner) => inner,
        }
    }
}

impl DiagnosticError for RegistryError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::DuplicateResolver { key } => {
                Some(format!("'{key}' was registered more than once."))
            }
            Self::InvalidKey(_) => {
                Some("Names must be non-empty and the type name cannot contain '.'.".into())
            }
        }
    }
}
