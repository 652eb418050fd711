use crate::core::io::coordinates::CoordinatesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid value for '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("Invalid boundary [{lower}, {upper}): bounds must be finite with a finite, positive width")]
    InvalidBoundary { lower: f64, upper: f64 },
}

#[derive(Debug, Error)]
pub enum InitializerError {
    #[error("Coordinates error: {0}")]
    Coordinates(#[from] CoordinatesError),

    #[error("Initialization strategy '{0}' is not implemented")]
    UnimplementedStrategy(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
