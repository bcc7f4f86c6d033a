//! Read-only view over a session's results, newest first.

use crate::profile::ScreenProfile;
use crate::types::GeneratedImage;

/// Snapshot of the result list at the time it was taken.
#[derive(Debug, Clone)]
pub struct Gallery {
    profile: ScreenProfile,
    entries: Vec<GeneratedImage>,
}

impl Gallery {
    pub fn new(profile: ScreenProfile, entries: Vec<GeneratedImage>) -> Self {
        Self { profile, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GeneratedImage> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedImage> {
        self.entries.iter()
    }

    /// e.g. `Generated Images (3)`
    pub fn header(&self) -> String {
        format!("Generated Images ({})", self.entries.len())
    }

    /// Summary lines for one entry: prompt, style (Studio), and time.
    pub fn describe(&self, entry: &GeneratedImage) -> Vec<String> {
        let mut lines = vec![format!("{}: {}", self.profile.prompt_label(), entry.prompt)];
        if let Some(style) = entry.style {
            lines.push(format!("Style: {}", style.label()));
        }
        lines.push(format!("Generated: {}", entry.display_time()));
        lines
    }

    /// One-line label for menus.
    pub fn menu_label(&self, entry: &GeneratedImage) -> String {
        const MAX_CHARS: usize = 60;
        let mut prompt: String = entry.prompt.chars().take(MAX_CHARS).collect();
        if entry.prompt.chars().count() > MAX_CHARS {
            prompt.push_str("...");
        }
        match entry.style {
            Some(style) => format!("{prompt} [{}]", style.label()),
            None => prompt,
        }
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a GeneratedImage;
    type IntoIter = std::slice::Iter<'a, GeneratedImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
