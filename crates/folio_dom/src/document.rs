//! The document surface.

/// Presentation class toggled on the overlay and on the selected list entry.
pub const ACTIVE_CLASS: &str = "active";

/// Class that keeps the overlay out of the layout until first opened.
pub const HIDDEN_CLASS: &str = "hidden";

/// Named containers of the page shell.
///
/// List entries are addressed separately by project id, see
/// [`Document::append_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Right-hand detail container on wide viewports
    Display,
    /// Full-viewport overlay layer on narrow viewports
    Overlay,
    /// Inner content region of the overlay
    OverlayContent,
    /// Close affordance shown next to the desktop detail view
    StaticClose,
}

impl Region {
    /// Element id of this region in the page shell.
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::Display => "projectDisplay",
            Region::Overlay => "mobileOverlay",
            Region::OverlayContent => "overlayContent",
            Region::StaticClose => "static-close-btn",
        }
    }

    /// All regions, in page order.
    pub fn all() -> &'static [Region] {
        &[
            Region::Display,
            Region::Overlay,
            Region::OverlayContent,
            Region::StaticClose,
        ]
    }
}

/// Operations the view controller performs on the page.
///
/// Implementations must not call back into the controller; every input
/// flows through the host's message loop instead.
pub trait Document {
    /// Current viewport width in logical pixels.
    fn viewport_width(&self) -> f64;

    /// Append one selectable entry for `id` to the project list.
    fn append_entry(&mut self, id: u32, label: &str);

    /// Mark the entry for `id` active and clear every other entry.
    /// `None` clears all entries.
    fn set_active_entry(&mut self, id: Option<u32>);

    /// Replace the markup inside `region`.
    fn set_inner_html(&mut self, region: Region, html: &str);

    /// Add or remove a class on `region`.
    fn set_class(&mut self, region: Region, class: &str, present: bool);

    /// Whether `region` currently carries `class`.
    fn has_class(&self, region: Region, class: &str) -> bool;

    /// Show or hide `region` via its inline display style.
    fn set_displayed(&mut self, region: Region, displayed: bool);

    /// Suppress or restore scrolling of the page body.
    fn set_scroll_locked(&mut self, locked: bool);
}
