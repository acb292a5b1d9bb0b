//! Configuration schema types.

use serde::{Deserialize, Serialize};

use fieldrun_protocol::paths;

/// Top-level fieldrun configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldrunConfig {
    /// Invocation boundary settings.
    #[serde(default)]
    pub io: IoConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the request and result documents.
///
/// `-` selects stdin for the input and stdout for the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    /// Request document path.
    #[serde(default = "default_input_path")]
    pub input_path: String,
    /// Result document path.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

fn default_input_path() -> String {
    paths::DEFAULT_INPUT_PATH.to_string()
}
fn default_output_path() -> String {
    paths::DEFAULT_OUTPUT_PATH.to_string()
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per line, for log aggregation.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "fieldrun_runtime=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
