//! Opens the invocation boundary named by a path.
//!
//! `-` means stdin for sources and stdout for sinks; anything else is a
//! file path.

use fieldrun_runtime::{RequestSource, ResultSink};
use fieldrun_transport_file::{FileSink, FileSource, StreamSink, StreamSource};

/// Path value selecting the standard streams.
pub const STDIO: &str = "-";

/// Opens a request source.
pub fn open_source(path: &str) -> Box<dyn RequestSource> {
    if path == STDIO {
        Box::new(StreamSource::stdin())
    } else {
        Box::new(FileSource::new(path))
    }
}

/// Opens a result sink.
pub fn open_sink(path: &str) -> Box<dyn ResultSink> {
    if path == STDIO {
        Box::new(StreamSink::stdout())
    } else {
        Box::new(FileSink::new(path))
    }
}
