// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal swipe recognition for paged strips.
//!
//! A swipe is a press, an optional series of moves, and a release. Only the
//! horizontal distance between press and release matters: if the pointer
//! travelled further than the threshold, the gesture is reported as a page
//! step. Moving left (press `x` greater than release `x`) advances, moving
//! right goes back.
//!
//! Touch and mouse streams are handled the same way; hosts forward
//! `touchstart`/`mousedown` to [`SwipeState::on_down`] and
//! `touchend`/`mouseup` to [`SwipeState::on_up`].
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::swipe::{DragState, SwipeState};
//!
//! let mut state = SwipeState::with_threshold(50.0);
//! state.on_down(Point::new(100.0, 0.0));
//! assert_eq!(state.state(), DragState::Dragging { start_x: 100.0 });
//!
//! // 50px exactly is not enough.
//! assert_eq!(state.on_up(Point::new(50.0, 0.0)), None);
//! assert_eq!(state.state(), DragState::Idle);
//! ```

use kurbo::Point;

/// Minimum horizontal travel, in logical pixels, for a release to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Pointer interaction state for one strip.
///
/// Every `Dragging` state is returned to `Idle` by [`SwipeState::on_up`] or
/// [`SwipeState::cancel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// No press is active.
    Idle,
    /// A press is active.
    Dragging {
        /// Horizontal pointer position at press time.
        start_x: f64,
    },
}

/// Page step requested by a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Pointer moved left; show the following item.
    Next,
    /// Pointer moved right; show the preceding item.
    Previous,
}

/// Swipe recognizer over a single horizontal strip.
#[derive(Clone, Debug)]
pub struct SwipeState {
    drag: DragState,
    /// Horizontal travel that must be exceeded (strictly) to produce a swipe.
    pub threshold: f64,
}

impl SwipeState {
    /// Create a recognizer using [`DEFAULT_SWIPE_THRESHOLD`].
    pub const fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    /// Create a recognizer with a custom threshold.
    ///
    /// Negative thresholds behave like `0.0`. NaN and infinite thresholds
    /// fall back to [`DEFAULT_SWIPE_THRESHOLD`].
    pub const fn with_threshold(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() || threshold.is_infinite() {
            DEFAULT_SWIPE_THRESHOLD
        } else if threshold < 0.0 {
            0.0
        } else {
            threshold
        };
        Self {
            drag: DragState::Idle,
            threshold,
        }
    }

    /// Record a press. A press while already dragging restarts the drag.
    pub fn on_down(&mut self, position: Point) {
        self.drag = DragState::Dragging {
            start_x: position.x,
        };
    }

    /// Process a pointer move.
    ///
    /// Returns `true` while a drag is active, which is the host's cue to
    /// suppress default pointer behavior (text selection, image drag).
    pub fn on_move(&mut self, _position: Point) -> bool {
        self.is_dragging()
    }

    /// Process a release and decide whether it completes a swipe.
    ///
    /// The state returns to [`DragState::Idle`] whether or not a swipe was
    /// recognized.
    pub fn on_up(&mut self, position: Point) -> Option<SwipeDirection> {
        let DragState::Dragging { start_x } = core::mem::replace(&mut self.drag, DragState::Idle)
        else {
            return None;
        };

        let delta = start_x - position.x;
        if delta > self.threshold {
            Some(SwipeDirection::Next)
        } else if delta < -self.threshold {
            Some(SwipeDirection::Previous)
        } else {
            tracing::trace!(delta, threshold = self.threshold, "release below swipe threshold");
            None
        }
    }

    /// Abandon the current drag, if any.
    ///
    /// Returns `true` if a drag was active.
    pub fn cancel(&mut self) -> bool {
        matches!(
            core::mem::replace(&mut self.drag, DragState::Idle),
            DragState::Dragging { .. }
        )
    }

    /// Returns `true` while a press is active.
    pub const fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Current drag state.
    pub const fn state(&self) -> DragState {
        self.drag
    }
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::new()
    }
}
