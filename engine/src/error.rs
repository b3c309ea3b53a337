//! Engine error types
//!
//! Round-time operations never fail. These errors only surface at
//! configuration boundaries: parsing labels, loading persona tables and
//! reading environment configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while configuring the engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Label is not one of the six emotional states
    #[error("Unknown emotional state: {0}")]
    UnknownState(String),

    /// Label is not one of the debate sides
    #[error("Unknown debate side: {0}")]
    UnknownSide(String),

    /// Language code is not supported
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    /// A persona coefficient lies outside [0, 1]
    #[error("Persona '{persona}' has {field} = {value}, expected a value in [0, 1]")]
    InvalidCoefficient {
        persona: String,
        field: String,
        value: f64,
    },

    /// Persona table could not be parsed
    #[error("Invalid persona table{}: {message}", location(path))]
    InvalidPersonaTable {
        path: Option<PathBuf>,
        message: String,
    },

    /// Persona table file could not be read
    #[error("Failed to read persona table at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Environment variable holds an unusable value
    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: String, value: String },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}
