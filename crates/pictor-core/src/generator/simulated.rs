//! Simulated backend: waits, then points at a random placeholder image.
//!
//! No inference happens. Each call appends the current instant as a
//! `random=` query so consecutive results render as different images.

use super::provider::{GeneratedPayload, GenerationRequest, ImageGenerator};
use crate::error::GenerationError;
use async_trait::async_trait;
use std::time::Duration;

/// Placeholder-image backend used by the History screen.
pub struct SimulatedGenerator {
    endpoint: String,
    delay: Duration,
}

impl SimulatedGenerator {
    pub fn new(endpoint: &str, delay: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            delay,
        }
    }

    fn placeholder_url(&self, now_ms: i64) -> String {
        let separator = if self.endpoint.contains('?') {
            '&'
        } else {
            '?'
        };
        format!("{}{separator}random={now_ms}", self.endpoint)
    }
}

#[async_trait]
impl ImageGenerator for SimulatedGenerator {
    fn name(&self) -> &str {
        "simulated"
    }

    fn requires_credential(&self) -> bool {
        false
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPayload, GenerationError> {
        tracing::debug!(
            "Simulating generation for {} char prompt ({}ms delay)",
            request.prompt.len(),
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;

        let url = self.placeholder_url(chrono::Utc::now().timestamp_millis());
        Ok(GeneratedPayload::Remote { url })
    }

    fn timeout(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_url_appends_random() {
        let generator = SimulatedGenerator::new("https://picsum.photos/800/600", Duration::ZERO);
        assert_eq!(
            generator.placeholder_url(1_700_000_000_000),
            "https://picsum.photos/800/600?random=1700000000000"
        );
    }

    #[test]
    fn test_placeholder_url_extends_existing_query() {
        let generator = SimulatedGenerator::new("https://img.example/x?grayscale", Duration::ZERO);
        assert_eq!(
            generator.placeholder_url(5),
            "https://img.example/x?grayscale&random=5"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_waits_for_delay() {
        let generator =
            SimulatedGenerator::new("https://picsum.photos/800/600", Duration::from_millis(3000));
        let started = tokio::time::Instant::now();

        let payload = generator
            .generate(&GenerationRequest::new("Rome burns"))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(3000));
        match payload {
            GeneratedPayload::Remote { url } => {
                assert!(url.starts_with("https://picsum.photos/800/600?random="))
            }
            other => panic!("expected remote payload, got {other:?}"),
        }
    }
}
