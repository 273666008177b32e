//! Application message types.
//!
//! Every input to the view controller, from user clicks to the completion of
//! deferred overlay work, is a message handled by `ViewController::update`.

/// Messages that can be sent to update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A list entry was activated
    SelectProject(u32),
    /// The desktop close affordance was activated
    ResetToHome,
    /// The overlay close control was activated
    CloseOverlay,
    /// The viewport changed size
    ViewportResized,
    /// Animation frame after the overlay was opened
    OverlayFrame {
        /// Overlay generation at the time of opening
        generation: u64,
    },
    /// Overlay close transition elapsed
    OverlayClosed {
        /// Overlay generation at the time of closing
        generation: u64,
    },
}
