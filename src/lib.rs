//! Folio - single-page portfolio viewer
//!
//! A project list with a detail view beside it on wide viewports and in a
//! sliding overlay on narrow ones. Runs in the browser as WebAssembly and
//! natively against an in-memory document.

mod catalog;
mod config;
pub mod constants;
mod controller;
pub mod driver;
mod headless;
mod message;
mod model;
mod overlay;
mod render;

pub use catalog::{Catalog, CatalogError, ProjectRecord};
pub use config::{AppConfig, ConfigError, LayoutConfig, LogLevel};
pub use controller::{DesktopView, ViewController};
pub use headless::Headless;
pub use message::Message;
pub use model::{Media, MediaKind, Project};
pub use overlay::{OverlayController, OverlayPhase};
pub use render::{escape, render_detail, render_welcome};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
