//! Error types shared across Multiwall crates.

use std::path::PathBuf;

/// Top-level error type for Multiwall operations.
#[derive(Debug, thiserror::Error)]
pub enum MultiwallError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown fit strategy: {key:?} (expected one of: fill, fit, stretch, tile, center)")]
    UnknownFitStrategy { key: String },

    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    #[error("No image assigned to monitor {label}")]
    MissingImage { label: String },

    #[error("Screen {screen} not found in display layout")]
    ScreenNotFound { screen: u32 },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Command `{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using MultiwallError.
pub type MultiwallResult<T> = Result<T, MultiwallError>;

impl MultiwallError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    /// Whether this error was caused by caller-supplied configuration
    /// rather than a resource or collaborator failure.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::UnknownFitStrategy { .. }
                | Self::InvalidGeometry { .. }
                | Self::MissingImage { .. }
                | Self::ScreenNotFound { .. }
        )
    }
}
