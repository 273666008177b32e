//! Carousel media entries.

use crate::constants::VIDEO_EXTENSION;

/// How a media path is presented in the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Looping, muted, autoplaying video without controls
    Video,
    /// Lazily loaded still image
    Image,
}

impl MediaKind {
    /// Classify a path by its extension. Only a literal `.mp4` suffix is a video.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(VIDEO_EXTENSION) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// One carousel item: an asset path and its presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    /// Asset path relative to the page
    pub path: String,
    /// Presentation derived from the path
    pub kind: MediaKind,
}

impl Media {
    /// Create a media entry, classifying it by extension.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: MediaKind::from_path(path),
        }
    }

    /// Whether this entry renders as a video.
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_by_extension() {
        assert_eq!(MediaKind::from_path("images/hormonisite.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("images/mmf1.png"), MediaKind::Image);
        assert_eq!(MediaKind::from_path("images/awir3.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::from_path("no-extension"), MediaKind::Image);
    }

    #[test]
    fn test_suffix_must_match_exactly() {
        // Uppercase or mid-path occurrences are not videos
        assert_eq!(MediaKind::from_path("clip.MP4"), MediaKind::Image);
        assert_eq!(MediaKind::from_path("clip.mp4.png"), MediaKind::Image);
    }
}
