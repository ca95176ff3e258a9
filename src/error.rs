//! Error types for the simulation.
//!
//! Physics itself never fails; only spawning and configuration do.

use thiserror::Error;

/// Errors surfaced by spawn requests and configuration handling.
#[derive(Debug, Error)]
pub enum SimError {
    /// Ball radius must be positive and finite.
    #[error("Invalid ball radius: {0}")]
    InvalidRadius(f32),

    /// Spawn position has a NaN or infinite component.
    #[error("Invalid spawn position: ({0}, {1})")]
    InvalidPosition(f32, f32),

    /// Configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
