//! Image generation backends.
//!
//! Provides a backend abstraction over a simulated placeholder service and
//! the Clipdrop text-to-image API.

pub(crate) mod clipdrop;
pub(crate) mod provider;
pub(crate) mod simulated;

pub use clipdrop::ClipdropGenerator;
pub use provider::{
    Backend, GeneratedPayload, GenerationRequest, GeneratorFactory, ImageGenerator,
};
pub use simulated::SimulatedGenerator;
