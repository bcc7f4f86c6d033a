//! Pictor Core - text-to-image sessions for the History and Studio screens.
//!
//! A session takes a short prompt, enhances it for its screen, sends it to
//! an image backend, and keeps the results in a newest-first gallery that
//! can be downloaded from or regenerated.
//!
//! # Architecture
//!
//! ```text
//! Prompt → Validate → Enhance → Generator (simulated | Clipdrop) → Gallery
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use pictor_core::{Config, ScreenProfile, Session, Style};
//!
//! #[tokio::main]
//! async fn main() -> pictor_core::Result<()> {
//!     let config = Config::load()?;
//!     let session = Session::from_config(ScreenProfile::Studio, &config);
//!
//!     session.set_credential(std::env::var("CLIPDROP_API_KEY").unwrap_or_default());
//!     session.set_style(Style::Watercolor);
//!     let image = session.generate_prompt("A lighthouse at dawn").await?;
//!     session.download(&image, &config.download_dir()).await?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod download;
pub mod enhance;
pub mod error;
pub mod gallery;
pub mod generator;
mod inflight;
pub mod notify;
pub mod objects;
pub mod profile;
pub mod prompts;
pub mod session;
pub mod style;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient access
pub use config::Config;
pub use enhance::Enhancement;
pub use error::{
    ConfigError, DownloadError, GenerationError, GenerationResult, PictorError, Result,
    ValidationError,
};
pub use gallery::Gallery;
pub use generator::{Backend, GeneratorFactory, ImageGenerator};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use objects::ObjectStore;
pub use profile::ScreenProfile;
pub use session::Session;
pub use style::Style;
pub use types::GeneratedImage;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
