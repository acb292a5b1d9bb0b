//! # fieldrun-transport-file
//!
//! Boundary adapters for `fieldrun-runtime`.
//!
//! [`FileSource`] / [`FileSink`] implement the mounted-file contract
//! (`/inputs/dagger.json` in, `/outputs/dagger.json` out by default).
//! [`StreamSource`] / [`StreamSink`] work over any async reader/writer,
//! including stdin/stdout.

pub mod file;
pub mod stream;

pub use file::{FileSink, FileSource};
pub use stream::{StreamSink, StreamSource};
