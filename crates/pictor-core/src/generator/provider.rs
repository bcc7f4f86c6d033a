//! Image generator trait and request/response types.
//!
//! Defines the interface every backend implements, plus the factory that
//! builds the right backend from the configured `Backend` choice.

use crate::config::Config;
use crate::error::GenerationError;
use crate::objects::Blob;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A single request for one image.
#[derive(Clone)]
pub struct GenerationRequest {
    /// Final, enhanced prompt
    pub prompt: String,
    /// API key for backends that need one
    pub credential: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            credential: None,
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }
}

// Keeps the key out of debug logs.
impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("prompt", &self.prompt)
            .field(
                "credential",
                &self.credential.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// What a backend hands back on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedPayload {
    /// The image lives at a remote URL
    Remote { url: String },
    /// The image arrived inline and still needs an object URL
    Bytes(Blob),
}

/// Trait that all image generation backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn ImageGenerator>` for dynamic dispatch).
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Backend name for logging (e.g., "clipdrop", "simulated").
    fn name(&self) -> &str;

    /// Whether requests must carry a credential.
    fn requires_credential(&self) -> bool;

    /// Produce exactly one image for the request.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPayload, GenerationError>;

    /// Per-request timeout for this backend.
    fn timeout(&self) -> Duration;
}

/// Available backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Fixed delay, then a placeholder image URL
    Simulated,
    /// Clipdrop text-to-image API
    Clipdrop,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Simulated => "simulated",
            Backend::Clipdrop => "clipdrop",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(Backend::Simulated),
            "clipdrop" => Ok(Backend::Clipdrop),
            other => Err(format!(
                "Unknown backend: {other} (expected \"simulated\" or \"clipdrop\")"
            )),
        }
    }
}

/// Factory that creates the configured backend.
pub struct GeneratorFactory;

impl GeneratorFactory {
    pub fn create(backend: Backend, config: &Config) -> Box<dyn ImageGenerator> {
        match backend {
            Backend::Simulated => Box::new(super::simulated::SimulatedGenerator::new(
                &config.simulated.placeholder_endpoint,
                Duration::from_millis(config.simulated.delay_ms),
            )),
            Backend::Clipdrop => Box::new(super::clipdrop::ClipdropGenerator::new(
                &config.clipdrop.endpoint,
                Duration::from_millis(config.clipdrop.timeout_ms),
            )),
        }
    }
}
