//! Per-screen behaviour: enhancement, prompt set, capabilities, and texts.

use crate::config::Config;
use crate::enhance::Enhancement;
use crate::generator::Backend;
use crate::prompts::{HISTORICAL_EXAMPLES, SURPRISE_PROMPTS};
use crate::style::Style;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown when a second generation is attempted while one is outstanding.
pub const BUSY_MESSAGE: &str = "An image is already being generated";

/// Shown when the backend needs a key and none was entered.
const MISSING_CREDENTIAL_MESSAGE: &str = "Please enter your Clipdrop API key";

/// The two screens a session can back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenProfile {
    /// Historical-event visualizer with fixed enhancement clauses
    History,
    /// General text-to-image studio with selectable styles
    Studio,
}

impl ScreenProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenProfile::History => "history",
            ScreenProfile::Studio => "studio",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScreenProfile::History => "History Visualizer",
            ScreenProfile::Studio => "AI Image Generator",
        }
    }

    /// Enhancement applied before the request; `style` is ignored by History.
    pub fn enhancement(&self, style: Style) -> Enhancement {
        match self {
            ScreenProfile::History => Enhancement::Historical,
            ScreenProfile::Studio => Enhancement::Styled(style),
        }
    }

    /// Backend this screen uses under the given configuration.
    pub fn backend(&self, config: &Config) -> Backend {
        match self {
            ScreenProfile::History => config.generation.history_backend,
            ScreenProfile::Studio => config.generation.studio_backend,
        }
    }

    /// Built-in prompts: examples for History, surprise pool for Studio.
    pub fn prompt_set(&self) -> &'static [&'static str] {
        match self {
            ScreenProfile::History => &HISTORICAL_EXAMPLES,
            ScreenProfile::Studio => &SURPRISE_PROMPTS,
        }
    }

    pub fn uses_style(&self) -> bool {
        matches!(self, ScreenProfile::Studio)
    }

    pub fn assigns_ids(&self) -> bool {
        matches!(self, ScreenProfile::Studio)
    }

    /// History entries store the enhanced prompt, so regenerating them would
    /// enhance twice.
    pub fn supports_regenerate(&self) -> bool {
        matches!(self, ScreenProfile::Studio)
    }

    /// Whether gallery entries keep the enhanced prompt instead of the raw one.
    pub fn records_enhanced_prompt(&self) -> bool {
        matches!(self, ScreenProfile::History)
    }

    /// Label for the prompt line in the gallery.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            ScreenProfile::History => "Enhanced Prompt",
            ScreenProfile::Studio => "Prompt",
        }
    }

    pub fn empty_prompt_message(&self) -> &'static str {
        match self {
            ScreenProfile::History => "Please enter a historical event description",
            ScreenProfile::Studio => "Please enter a prompt to generate an image",
        }
    }

    pub fn missing_credential_message(&self) -> &'static str {
        MISSING_CREDENTIAL_MESSAGE
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ScreenProfile::History => "Historical image generated successfully!",
            ScreenProfile::Studio => "Image generated successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            ScreenProfile::History => "Failed to generate image. Please try again.",
            ScreenProfile::Studio => {
                "Failed to generate image. Please check your API key and try again."
            }
        }
    }
}

impl fmt::Display for ScreenProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "history" => Ok(ScreenProfile::History),
            "studio" => Ok(ScreenProfile::Studio),
            other => Err(format!(
                "Unknown screen: {other} (expected \"history\" or \"studio\")"
            )),
        }
    }
}
