//! Portfolio project record.

use super::Media;

/// One portfolio entry.
///
/// Records are only built through the catalog, which guarantees a non-zero
/// unique id and a non-empty tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique, stable identifier
    pub id: u32,
    /// Display title, also the list label
    pub title: String,
    /// Category labels in display order
    pub tags: Vec<String>,
    /// Free-text description
    pub description: String,
    /// Carousel media in display order
    pub media: Vec<Media>,
}

impl Project {
    /// Create a project from borrowed parts.
    pub fn new(id: u32, title: &str, tags: &[&str], description: &str, media: &[&str]) -> Self {
        Self {
            id,
            title: title.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            description: description.to_string(),
            media: media.iter().map(|path| Media::new(path)).collect(),
        }
    }

    /// Number of video items in the carousel.
    pub fn video_count(&self) -> usize {
        self.media.iter().filter(|media| media.is_video()).count()
    }
}
