//! Global constants for the portfolio viewer

use std::time::Duration;

/// Viewports at or below this width (logical px) use the overlay.
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;

/// Overlay CSS transition duration; scroll is restored after this delay.
pub const OVERLAY_TRANSITION: Duration = Duration::from_millis(300);

/// Extension that marks a media path as a video.
pub const VIDEO_EXTENSION: &str = ".mp4";

/// Id of the optional inline JSON catalog in the page shell.
pub const INLINE_CATALOG_ID: &str = "projectData";
