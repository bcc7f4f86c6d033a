//! Clipdrop text-to-image backend.
//!
//! One multipart `POST` with a `prompt` field and the key in `x-api-key`.
//! A success response body is the image itself.

use super::provider::{GeneratedPayload, GenerationRequest, ImageGenerator};
use crate::error::GenerationError;
use crate::objects::Blob;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};

/// Header carrying the user's key.
const API_KEY_HEADER: &str = "x-api-key";

/// Content type assumed when the response does not declare one.
const DEFAULT_IMAGE_TYPE: &str = "image/png";

/// Clipdrop provider.
pub struct ClipdropGenerator {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl ClipdropGenerator {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageGenerator for ClipdropGenerator {
    fn name(&self) -> &str {
        "clipdrop"
    }

    fn requires_credential(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPayload, GenerationError> {
        let start = Instant::now();
        let api_key = request.credential.as_deref().unwrap_or_default();

        let form = reqwest::multipart::Form::new().text("prompt", request.prompt.clone());

        let resp = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .multipart(form)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("Clipdrop request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status_code: status.as_u16(),
                message: format!("Clipdrop HTTP {status}: {}", text.trim()),
            });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_TYPE)
            .to_string();

        let bytes = resp.bytes().await.map_err(|e| {
            GenerationError::Transport(format!("Failed to read Clipdrop response: {e}"))
        })?;

        tracing::debug!(
            "Clipdrop returned {} bytes ({content_type}) in {}ms",
            bytes.len(),
            start.elapsed().as_millis()
        );

        Ok(GeneratedPayload::Bytes(Blob::new(
            bytes.to_vec(),
            content_type,
        )))
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
