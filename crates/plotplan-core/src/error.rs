//! Error types for PlotPlan

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotplanError {
    // Geometry errors
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    // Persisted-plan errors
    #[error("Persisted plan at {} is unreadable: {reason}", path.display())]
    PlanUnreadable { path: PathBuf, reason: String },

    // Remote API errors
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("{service} unavailable: {reason}")]
    ServiceUnavailable { service: String, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, PlotplanError>;
