//! Sub-configuration structs with their defaults.

use crate::generator::Backend;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory where downloaded images are saved
    pub download_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("~/Pictures/pictor"),
        }
    }
}

/// Which backend each screen talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Backend used by the Studio screen
    pub studio_backend: Backend,

    /// Backend used by the History screen
    pub history_backend: Backend,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            studio_backend: Backend::Clipdrop,
            history_backend: Backend::Simulated,
        }
    }
}

/// Simulated backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedConfig {
    /// Artificial latency before the placeholder is returned
    pub delay_ms: u64,

    /// Random-image service the placeholder URL points at.
    /// A `random=<now_ms>` query is appended so every call differs.
    pub placeholder_endpoint: String,
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            placeholder_endpoint: "https://picsum.photos/800/600".to_string(),
        }
    }
}

/// Clipdrop text-to-image settings.
///
/// The API key is deliberately absent: it is supplied per session and
/// never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipdropConfig {
    /// Text-to-image endpoint
    pub endpoint: String,

    /// Transport timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClipdropConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://clipdrop-api.co/text-to-image/v1".to_string(),
            timeout_ms: 60000,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("error", "warn", "info", "debug", "trace")
    pub level: String,

    /// Log format ("pretty" or "json")
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
