//! Prompt enhancement: fixed descriptor clauses appended to the user's text.
//!
//! Both variants are pure string concatenation, so the same input always
//! yields the same output.

use crate::style::Style;

/// Clauses that anchor the scene in its historical period.
pub const HISTORICAL_CONTEXT: [&str; 5] = [
    "historically accurate",
    "period-appropriate clothing and architecture",
    "authentic historical setting",
    "detailed historical context",
    "museum quality illustration style",
];

/// Clauses that push rendering quality.
pub const HISTORICAL_VISUAL: [&str; 4] = [
    "cinematic lighting",
    "rich colors and textures",
    "high detail and resolution",
    "professional historical illustration style",
];

/// Sentence that closes every historical prompt.
pub const HISTORICAL_CLOSING: &str = "Ultra high resolution historical artwork.";

/// Quality descriptors that follow the style label.
pub const STYLED_QUALITY: [&str; 2] = ["high quality", "detailed"];

/// How a screen turns a raw prompt into the text sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enhancement {
    /// History screen clauses
    Historical,
    /// Studio screen style label plus quality descriptors
    Styled(Style),
}

impl Enhancement {
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Enhancement::Historical => enhance_historical(raw),
            Enhancement::Styled(style) => enhance_styled(raw, *style),
        }
    }
}

/// `"{raw}. {context clauses}, {visual clauses}. {closing}"`
pub fn enhance_historical(raw: &str) -> String {
    format!(
        "{raw}. {}, {}. {HISTORICAL_CLOSING}",
        HISTORICAL_CONTEXT.join(", "),
        HISTORICAL_VISUAL.join(", ")
    )
}

/// `"{raw}, {style} style, high quality, detailed"`
pub fn enhance_styled(raw: &str, style: Style) -> String {
    format!(
        "{raw}, {} style, {}",
        style.value(),
        STYLED_QUALITY.join(", ")
    )
}
