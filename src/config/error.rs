//! Errors from reading and checking `folio.toml`.

use std::path::PathBuf;
use thiserror::Error;

/// Why a config could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Bad TOML, a wrong value type, or an unknown section or key.
    #[error("invalid folio.toml")]
    Toml(#[from] toml::de::Error),

    /// Parsed fine but holds an unusable value.
    #[error("invalid config value: {0}")]
    Validation(String),
}
