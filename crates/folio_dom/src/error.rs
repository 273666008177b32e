//! Error types for document access.

use thiserror::Error;

/// Errors raised while binding to or mutating the page.
#[derive(Error, Debug)]
pub enum DomError {
    /// No global `window` (not running in a browser main thread)
    #[error("No global window exists")]
    NoWindow,

    /// Window has no document
    #[error("No document in window")]
    NoDocument,

    /// A required page-shell element is absent
    #[error("Missing element #{id}")]
    MissingElement {
        /// Element id that was looked up
        id: &'static str,
    },

    /// A browser API call threw
    #[error("{operation} failed: {message}")]
    Js {
        /// What was being attempted
        operation: &'static str,
        /// Debug rendering of the thrown value
        message: String,
    },
}

impl DomError {
    /// Create a missing element error.
    pub fn missing(id: &'static str) -> Self {
        Self::MissingElement { id }
    }
}
