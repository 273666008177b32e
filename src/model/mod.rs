//! Data models for the portfolio.

mod media;
mod project;

pub use media::{Media, MediaKind};
pub use project::Project;
