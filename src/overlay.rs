//! Overlay open/close state machine.
//!
//! The overlay animates between closed and open through CSS transitions, so
//! both directions finish asynchronously: opening on the next animation
//! frame, closing after the transition delay. Every open and close bumps a
//! generation counter and the deferred completions carry the generation they
//! were scheduled under. A completion whose generation is no longer current
//! is ignored, which keeps a slow close timer from unlocking scroll after
//! the overlay has been reopened.

use web_time::Instant;

/// Where the overlay is in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Not shown, background scroll free
    #[default]
    Closed,
    /// Content injected, waiting for the frame that starts the transition
    Opening,
    /// Fully open
    Open,
    /// Closing transition running, scroll still locked
    Closing,
}

/// Overlay state owned by the view controller.
#[derive(Debug, Default)]
pub struct OverlayController {
    phase: OverlayPhase,
    generation: u64,
    closing_since: Option<Instant>,
}

impl OverlayController {
    /// Create a closed overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the overlay is open or about to be.
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open)
    }

    /// Begin opening. Returns the generation the frame must carry.
    pub fn open(&mut self) -> u64 {
        self.generation += 1;
        self.phase = OverlayPhase::Opening;
        self.closing_since = None;
        log::trace!("Overlay: opening (generation {})", self.generation);
        self.generation
    }

    /// Animation frame arrived. Returns true if the active class should be applied.
    pub fn frame(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != OverlayPhase::Opening {
            log::trace!("Overlay: ignoring stale frame (generation {})", generation);
            return false;
        }
        self.phase = OverlayPhase::Open;
        true
    }

    /// Begin closing. Returns the generation the close timer must carry, or
    /// `None` if the overlay was not shown.
    pub fn close(&mut self) -> Option<u64> {
        if !self.is_shown() {
            return None;
        }
        self.generation += 1;
        self.phase = OverlayPhase::Closing;
        self.closing_since = Some(Instant::now());
        log::trace!("Overlay: closing (generation {})", self.generation);
        Some(self.generation)
    }

    /// Close timer fired. Returns true if background scroll should be restored.
    pub fn finish_close(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != OverlayPhase::Closing {
            log::debug!("Overlay: ignoring stale close timer (generation {})", generation);
            return false;
        }
        self.phase = OverlayPhase::Closed;
        if let Some(started) = self.closing_since.take() {
            log::debug!("Overlay: closed after {:?}", started.elapsed());
        }
        true
    }
}
