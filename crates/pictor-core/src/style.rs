//! Visual styles offered by the Studio screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A visual style appended to the prompt before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Realistic,
    #[serde(rename = "3d")]
    ThreeD,
    Anime,
    DigitalArt,
    OilPainting,
    Watercolor,
    Cyberpunk,
    Fantasy,
}

impl Style {
    /// All styles in menu order.
    pub const ALL: [Style; 8] = [
        Style::Realistic,
        Style::ThreeD,
        Style::Anime,
        Style::DigitalArt,
        Style::OilPainting,
        Style::Watercolor,
        Style::Cyberpunk,
        Style::Fantasy,
    ];

    /// Wire value, as it appears inside the enhanced prompt.
    pub fn value(&self) -> &'static str {
        match self {
            Style::Realistic => "realistic",
            Style::ThreeD => "3d",
            Style::Anime => "anime",
            Style::DigitalArt => "digital-art",
            Style::OilPainting => "oil-painting",
            Style::Watercolor => "watercolor",
            Style::Cyberpunk => "cyberpunk",
            Style::Fantasy => "fantasy",
        }
    }

    /// Human-readable label for menus and gallery lines.
    pub fn label(&self) -> &'static str {
        match self {
            Style::Realistic => "Realistic",
            Style::ThreeD => "3D Render",
            Style::Anime => "Anime",
            Style::DigitalArt => "Digital Art",
            Style::OilPainting => "Oil Painting",
            Style::Watercolor => "Watercolor",
            Style::Cyberpunk => "Cyberpunk",
            Style::Fantasy => "Fantasy",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.value() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Style::ALL.iter().map(Style::value).collect();
                format!("Unknown style '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
