#![forbid(unsafe_code)]

//! Vertical swipe-to-close tracking.
//!
//! # State Machine
//!
//! One tracker per controller, one interaction at a time:
//! `Idle → Dragging → (commit close | Idle)`.
//!
//! # Invariants
//!
//! 1. A close commits only for an upward swipe (`end_y - start_y` negative)
//!    whose distance exceeds the configured threshold, and only while swipe
//!    close is enabled.
//! 2. Drag coordinates reset to zero after every touch end, regardless of
//!    the commit decision.
//! 3. The was-dragging flag survives the touch end and clears on the next
//!    touch start, so the click handler that fires after a swipe can tell
//!    the two apart and skip its close-on-tap.
//! 4. Moves without a preceding touch start are ignored.

/// Gesture tuning, derived from the merged config.
#[derive(Debug, Clone, Copy)]
pub struct SwipeConfig {
    /// Distance in pixels an upward swipe must cover to commit a close.
    pub threshold: f64,
    /// Whether the swipe gesture is enabled at all.
    pub swipe_close: bool,
}

/// Vertical drag coordinates for the single active touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub start_y: f64,
    pub end_y: f64,
}

/// Decision taken when a touch interaction ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The swipe passed the threshold: close the modal.
    CommitClose,
    /// Below threshold, downward, or disabled: snap back, stay open.
    Release,
}

/// Tracks one vertical drag and decides close-on-release.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    config: SwipeConfig,
    drag: DragState,
    pointer_down: bool,
    was_dragging: bool,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            drag: DragState::default(),
            pointer_down: false,
            was_dragging: false,
        }
    }

    /// Begin an interaction at the given page-Y coordinate.
    pub fn touch_start(&mut self, y: f64) {
        self.was_dragging = false;
        self.pointer_down = true;
        self.drag.start_y = y;
    }

    /// Record a move. Returns the signed vertical movement to apply as a
    /// live translation when the drag is active, `None` otherwise.
    pub fn touch_move(&mut self, y: f64) -> Option<f64> {
        if !self.pointer_down {
            return None;
        }
        self.drag.end_y = y;
        let movement = self.drag.end_y - self.drag.start_y;
        if movement.abs() > 0.0 && self.config.swipe_close {
            self.was_dragging = true;
            Some(movement)
        } else {
            None
        }
    }

    /// End the interaction and evaluate the commit decision.
    ///
    /// Coordinates reset to zero afterward in every case.
    pub fn touch_end(&mut self) -> SwipeOutcome {
        self.pointer_down = false;
        let outcome = if self.drag.end_y != 0.0 && self.config.swipe_close {
            let movement = self.drag.end_y - self.drag.start_y;
            if movement < 0.0 && movement.abs() > self.config.threshold {
                SwipeOutcome::CommitClose
            } else {
                SwipeOutcome::Release
            }
        } else {
            SwipeOutcome::Release
        };
        self.drag = DragState::default();
        outcome
    }

    /// Whether a drag happened during the current/most recent interaction.
    #[inline]
    #[must_use]
    pub const fn was_dragging(&self) -> bool {
        self.was_dragging
    }

    /// Whether a touch is currently down.
    #[inline]
    #[must_use]
    pub const fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Current drag coordinates.
    #[inline]
    #[must_use]
    pub const fn drag(&self) -> DragState {
        self.drag
    }

    /// Back to idle: coordinates zeroed, flags cleared. Called on every
    /// close path so no gesture state leaks into the next open.
    pub fn reset(&mut self) {
        self.pointer_down = false;
        self.was_dragging = false;
        self.drag = DragState::default();
    }
}
