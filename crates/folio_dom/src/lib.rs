//! folio_dom - the document surface the portfolio controller drives
//!
//! This crate abstracts the handful of page-shell elements the controller
//! touches behind the [`Document`] trait, with an in-memory implementation
//! for native use and a web-sys implementation for the browser.

mod document;
mod error;
mod logging;
mod memory;
mod task;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use document::{Document, Region, ACTIVE_CLASS, HIDDEN_CLASS};
pub use error::DomError;
pub use logging::init_logging;
pub use memory::{ListEntry, MemoryDocument};
pub use task::{Task, TaskQueue};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::document::{Document, Region};
    pub use crate::task::Task;
}
