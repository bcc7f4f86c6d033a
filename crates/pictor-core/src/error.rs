//! Error types for Pictor sessions.
//!
//! Errors are split by concern so callers can tell a rejected request
//! (validation, busy) apart from a failed one (remote status, transport).

use thiserror::Error;

/// Top-level error type for Pictor operations.
#[derive(Error, Debug)]
pub enum PictorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Image generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Download errors
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Input rejected before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("API key is missing")]
    MissingCredential,
}

/// Failure classes for a single generation attempt.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Draft failed validation; nothing was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Another generation already holds the in-flight slot
    #[error("A generation is already in progress")]
    Busy,

    /// The generation endpoint answered with a non-success status
    #[error("API Error: {status_code}: {message}")]
    Api { status_code: u16, message: String },

    /// Connection, timeout, or body-read failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// The action is not offered by this screen
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl GenerationError {
    /// Short name of the failure class, used in notifications.
    pub fn class(&self) -> &'static str {
        match self {
            GenerationError::Validation(_) => "validation",
            GenerationError::Busy => "busy",
            GenerationError::Api { .. } => "api",
            GenerationError::Transport(_) => "transport",
            GenerationError::Unsupported(_) => "unsupported",
        }
    }

    /// HTTP status code, when the failure came from the remote service.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GenerationError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Download (re-fetch and save) errors.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The image URL could not be fetched
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The image host answered with a non-success status
    #[error("Fetching {url} returned HTTP {status_code}")]
    Status { url: String, status_code: u16 },

    /// The object URL was revoked or never belonged to this session
    #[error("Object URL not found: {0}")]
    ObjectNotFound(String),

    /// Writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Pictor results.
pub type Result<T> = std::result::Result<T, PictorError>;

/// Convenience type alias for generation results.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
