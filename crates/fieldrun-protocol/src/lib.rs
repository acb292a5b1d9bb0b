//! # fieldrun-protocol
//!
//! Wire format for the single-shot resolver invocation protocol.
//! A host writes one request document, the resolver process answers
//! with one result document.

pub mod error;
pub mod request;
pub mod result;

pub use error::ProtocolError;
pub use request::InvocationRequest;
pub use result::InvocationResult;

/// Top-level keys of the request document.
pub mod fields {
    /// Dotted `Type.field` resolver name.
    pub const RESOLVER: &str = "resolver";
    /// Field arguments object.
    pub const ARGS: &str = "args";
    /// Parent object value, optional.
    pub const PARENT: &str = "parent";
}

/// Default locations of the request and result documents.
pub mod paths {
    /// Where the host mounts the request document.
    pub const DEFAULT_INPUT_PATH: &str = "/inputs/dagger.json";
    /// Where the host collects the result document.
    pub const DEFAULT_OUTPUT_PATH: &str = "/outputs/dagger.json";
}
