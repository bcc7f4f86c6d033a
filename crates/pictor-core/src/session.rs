//! One screen's working state and the generate flow.
//!
//! A `Session` owns the draft (prompt, style, key), the result list, the
//! object URLs backing inline images, and the single in-flight slot. Every
//! user-visible outcome is also pushed through the session's `Notifier`.
//!
//! ```text
//! validate ─▶ claim slot ─▶ enhance ─▶ backend call ─▶ prepend entry
//!    │            │                        │
//!    └─ error     └─ Busy                  └─ error (list untouched)
//! ```

use crate::config::Config;
use crate::download;
use crate::enhance::Enhancement;
use crate::error::{DownloadError, GenerationError, GenerationResult, ValidationError};
use crate::gallery::Gallery;
use crate::generator::{GeneratedPayload, GenerationRequest, GeneratorFactory, ImageGenerator};
use crate::inflight::{InFlightPermit, InFlightSlot};
use crate::notify::Notifier;
use crate::objects::ObjectStore;
use crate::profile::{ScreenProfile, BUSY_MESSAGE};
use crate::prompts;
use crate::style::Style;
use crate::types::GeneratedImage;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Shown after "Surprise me" fills the draft.
pub const SURPRISE_MESSAGE: &str = "Surprise prompt loaded! Click generate to create your image.";

pub const DOWNLOAD_SUCCESS_MESSAGE: &str = "Image downloaded!";
pub const DOWNLOAD_FAILURE_MESSAGE: &str = "Failed to download image";

/// Download timeout for sessions not built from a config.
const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Default)]
struct SessionState {
    prompt: String,
    style: Style,
    credential: Option<String>,
    /// Newest first
    results: Vec<GeneratedImage>,
}

pub struct Session {
    profile: ScreenProfile,
    generator: Box<dyn ImageGenerator>,
    objects: ObjectStore,
    state: Mutex<SessionState>,
    in_flight: InFlightSlot,
    notifier: Notifier,
    http: reqwest::Client,
    download_timeout: Duration,
}

impl Session {
    pub fn new(profile: ScreenProfile, generator: Box<dyn ImageGenerator>) -> Self {
        Self {
            profile,
            generator,
            objects: ObjectStore::new(),
            state: Mutex::new(SessionState::default()),
            in_flight: InFlightSlot::default(),
            notifier: Notifier::silent(),
            http: reqwest::Client::new(),
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
        }
    }

    /// Session backed by the screen's configured backend.
    ///
    /// Downloads share the Clipdrop transport timeout.
    pub fn from_config(profile: ScreenProfile, config: &Config) -> Self {
        let backend = profile.backend(config);
        tracing::debug!("Starting {profile} session with {backend} backend");
        Self::new(profile, GeneratorFactory::create(backend, config))
            .with_download_timeout(Duration::from_millis(config.clipdrop.timeout_ms))
    }

    pub fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn profile(&self) -> ScreenProfile {
        self.profile
    }

    pub fn backend_name(&self) -> &str {
        self.generator.name()
    }

    pub fn requires_credential(&self) -> bool {
        self.generator.requires_credential()
    }

    // -- Draft --

    pub fn prompt(&self) -> String {
        self.state().prompt.clone()
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        self.state().prompt = prompt.into();
    }

    pub fn style(&self) -> Style {
        self.state().style
    }

    pub fn set_style(&self, style: Style) {
        self.state().style = style;
    }

    /// Held in memory for this session only.
    pub fn set_credential(&self, credential: impl Into<String>) {
        self.state().credential = Some(credential.into());
    }

    pub fn has_credential(&self) -> bool {
        self.state()
            .credential
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    }

    /// Whether a generation currently holds the in-flight slot.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_taken()
    }

    // -- Results --

    pub fn results(&self) -> Vec<GeneratedImage> {
        self.state().results.clone()
    }

    pub fn len(&self) -> usize {
        self.state().results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().results.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<GeneratedImage> {
        self.state().results.get(index).cloned()
    }

    pub fn gallery(&self) -> Gallery {
        Gallery::new(self.profile, self.results())
    }

    /// Object URLs backing inline images.
    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    // -- Prompt helpers --

    /// Copy the built-in prompt at `index` into the draft.
    pub fn use_example(&self, index: usize) -> Option<&'static str> {
        let example = *self.profile.prompt_set().get(index)?;
        self.set_prompt(example);
        Some(example)
    }

    /// Copy a random built-in prompt into the draft. Does not generate.
    pub fn surprise_me(&self) -> Option<&'static str> {
        let prompt = prompts::pick(self.profile.prompt_set(), &mut rand::thread_rng())?;
        self.set_prompt(prompt);
        self.notifier.success(SURPRISE_MESSAGE);
        Some(prompt)
    }

    // -- Actions --

    /// Generate from the current draft.
    pub async fn generate(&self) -> GenerationResult<GeneratedImage> {
        let (prompt, style) = {
            let state = self.state();
            (state.prompt.clone(), state.style)
        };
        let (permit, credential) = self.admit(&prompt)?;
        self.run(permit, credential, prompt, style).await
    }

    /// Replace the draft prompt, then generate.
    pub async fn generate_prompt(
        &self,
        prompt: impl Into<String>,
    ) -> GenerationResult<GeneratedImage> {
        self.set_prompt(prompt);
        self.generate().await
    }

    /// Generate again from an existing entry's prompt and style.
    ///
    /// The entry itself is left as is; the result is a new entry. The draft
    /// takes the entry's prompt and style once the request is admitted.
    pub async fn regenerate(&self, entry: &GeneratedImage) -> GenerationResult<GeneratedImage> {
        if !self.profile.supports_regenerate() {
            return Err(GenerationError::Unsupported(format!(
                "regenerate is not available on the {} screen",
                self.profile
            )));
        }

        let style = entry.style.unwrap_or_else(|| self.style());
        let (permit, credential) = self.admit(&entry.prompt)?;
        {
            let mut state = self.state();
            state.prompt = entry.prompt.clone();
            state.style = style;
        }
        self.run(permit, credential, entry.prompt.clone(), style).await
    }

    /// Save an entry's image into `dir`. The result list is not touched.
    pub async fn download(
        &self,
        entry: &GeneratedImage,
        dir: &Path,
    ) -> Result<PathBuf, DownloadError> {
        let timeout = self.download_timeout;
        match download::save_image(&self.http, &self.objects, entry, dir, timeout).await {
            Ok(path) => {
                self.notifier.success(DOWNLOAD_SUCCESS_MESSAGE);
                Ok(path)
            }
            Err(e) => {
                tracing::error!("Download of {} failed: {e}", entry.url);
                self.notifier.error(DOWNLOAD_FAILURE_MESSAGE, Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Validate, then claim the in-flight slot. Nothing in the session
    /// changes when this fails.
    fn admit(&self, prompt: &str) -> GenerationResult<(InFlightPermit<'_>, Option<String>)> {
        let credential = match self.validate(prompt) {
            Ok(credential) => credential,
            Err(e) => {
                let message = match e {
                    ValidationError::EmptyPrompt => self.profile.empty_prompt_message(),
                    ValidationError::MissingCredential => self.profile.missing_credential_message(),
                };
                return Err(self.reject(message, e.into()));
            }
        };

        let Some(permit) = self.in_flight.try_acquire() else {
            return Err(self.reject(BUSY_MESSAGE, GenerationError::Busy));
        };
        Ok((permit, credential))
    }

    async fn run(
        &self,
        permit: InFlightPermit<'_>,
        credential: Option<String>,
        prompt: String,
        style: Style,
    ) -> GenerationResult<GeneratedImage> {
        let enhancement: Enhancement = self.profile.enhancement(style);
        let enhanced = enhancement.apply(&prompt);

        let mut request = GenerationRequest::new(enhanced.clone());
        if self.generator.requires_credential() {
            if let Some(key) = credential {
                request = request.with_credential(key);
            }
        }

        tracing::info!(
            "Generating {} image via {} ({} char prompt)",
            self.profile,
            self.generator.name(),
            enhanced.len()
        );
        let start = Instant::now();

        let outcome = match self.generator.generate(&request).await {
            Ok(payload) => self.materialize(payload),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(url) => {
                let recorded_prompt = if self.profile.records_enhanced_prompt() {
                    enhanced
                } else {
                    prompt
                };
                let recorded_style = self.profile.uses_style().then_some(style);
                let entry = self.record(url, recorded_prompt, recorded_style);
                tracing::info!(
                    "Generated image in {}ms ({} in gallery)",
                    start.elapsed().as_millis(),
                    self.len()
                );
                drop(permit);
                self.notifier.success(self.profile.success_message());
                Ok(entry)
            }
            Err(e) => {
                drop(permit);
                tracing::error!(
                    "Generation via {} failed after {}ms: {e}",
                    self.generator.name(),
                    start.elapsed().as_millis()
                );
                Err(self.reject(self.profile.failure_message(), e))
            }
        }
    }

    /// Trimmed prompt must be non-empty; a backend that needs a key must
    /// have a non-empty one. Returns the trimmed key, if any.
    fn validate(&self, prompt: &str) -> Result<Option<String>, ValidationError> {
        if prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        let credential = self
            .state()
            .credential
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        if self.generator.requires_credential() && credential.is_none() {
            return Err(ValidationError::MissingCredential);
        }
        Ok(credential)
    }

    /// Turn a payload into the URL stored on the entry.
    fn materialize(&self, payload: GeneratedPayload) -> GenerationResult<String> {
        match payload {
            GeneratedPayload::Remote { url } if url.trim().is_empty() => Err(
                GenerationError::Transport("backend returned an empty image URL".to_string())
            ),
            GeneratedPayload::Remote { url } => Ok(url),
            GeneratedPayload::Bytes(blob) => Ok(self.objects.create(blob)),
        }
    }

    fn record(&self, url: String, prompt: String, style: Option<Style>) -> GeneratedImage {
        let mut state = self.state();
        let previous = state.results.first().map(|e| e.timestamp);
        let entry = GeneratedImage {
            id: self
                .profile
                .assigns_ids()
                .then(|| Uuid::new_v4().to_string()),
            url,
            prompt,
            style,
            timestamp: clamp_timestamp(chrono::Utc::now().timestamp_millis(), previous),
        };
        state.results.insert(0, entry.clone());
        entry
    }

    fn reject(&self, message: &str, err: GenerationError) -> GenerationError {
        self.notifier.error(message, Some(format!("{err} ({})", err.class())));
        err
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A new entry is never older than the one it is placed in front of.
fn clamp_timestamp(now_ms: i64, previous: Option<i64>) -> i64 {
    previous.map_or(now_ms, |prev| now_ms.max(prev))
}
