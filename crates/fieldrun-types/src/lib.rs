//! # fieldrun-types
//!
//! Domain types for the fieldrun resolver dispatcher.
//! This crate contains pure data types with zero external dependencies
//! (except serde for serialization).

pub mod error;
pub mod key;

// Re-exports for convenience.
pub use error::{DiagnosticError, ErrorKind, FieldrunError};
pub use key::ResolverKey;
