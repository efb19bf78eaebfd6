use std::path::PathBuf;

use thiserror::Error;

use crate::toast::ToastState;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("invalid configuration for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error("configuration error: {0}")]
    Other(String),
}

/// Failures while fetching toast assets. These never abort a toast.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected HTTP status while fetching image: {status}")]
    HttpStatus { status: reqwest::StatusCode },
    #[error("failed to read asset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported image scheme: {0}")]
    UnsupportedScheme(String),
    #[error("failed to launch sound player {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface backend failed: {0}")]
    Backend(String),
    #[error("no desktop surface available on this platform")]
    Unsupported,
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid toast transition from {from} to {to}")]
    InvalidTransition { from: ToastState, to: ToastState },
    #[error("toast lifecycle task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for AssetError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_status() {
            if let Some(status) = source.status() {
                return Self::HttpStatus { status };
            }
        }
        Self::Request { source }
    }
}

impl Error {
    /// Whether the error comes from the caller's configuration rather than
    /// from the host platform.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
