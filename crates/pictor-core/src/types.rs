//! Core data types for Pictor sessions.

use crate::style::Style;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One successfully generated image.
///
/// Entries are immutable once created; a regenerate produces a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Fresh UUID for Studio entries; History entries have none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Remote URL or session-scoped `blob:` object URL
    pub url: String,

    /// Prompt shown in the gallery (raw for Studio, enhanced for History)
    pub prompt: String,

    /// Style the image was generated with (Studio only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    /// Creation instant, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl GeneratedImage {
    /// Creation instant as a UTC datetime.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }

    /// Creation instant in local time, e.g. `2024-05-01 14:03:27`.
    pub fn display_time(&self) -> String {
        self.created_at()
            .map(|t| {
                t.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| "unknown time".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedImage {
        GeneratedImage {
            id: None,
            url: "https://picsum.photos/800/600?random=1".to_string(),
            prompt: "Rome burns".to_string(),
            style: None,
            timestamp: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_created_at() {
        let created = sample().created_at().unwrap();
        assert_eq!(created.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_display_time_format() {
        let shown = sample().display_time();
        assert_eq!(shown.len(), "2023-11-14 22:13:20".len());
    }

    #[test]
    fn test_serialization_omits_empty_optionals() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("\"style\""));

        let mut studio = sample();
        studio.id = Some("abc".to_string());
        studio.style = Some(Style::Fantasy);
        let json = serde_json::to_string(&studio).unwrap();
        assert!(json.contains("\"style\":\"fantasy\""));
    }
}
