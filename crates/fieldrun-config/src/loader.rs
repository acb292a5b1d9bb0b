//! Configuration loader (file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::FieldrunConfig;

/// Prefix of environment overrides. Nested keys use `__`,
/// e.g. `FIELDRUN_IO__OUTPUT_PATH`.
pub const ENV_PREFIX: &str = "FIELDRUN_";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`FIELDRUN_` prefix)
pub fn load_config(config_path: Option<&str>) -> Result<FieldrunConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(FieldrunConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
