// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: small input state machines for interactive widgets.
//!
//! The helpers here sit between raw host events and widget logic. They own no
//! elements and never read a clock: callers pass pointer positions and
//! millisecond timestamps in, and get decisions back.
//!
//! - [`swipe::SwipeState`]: horizontal drag/swipe recognition with an explicit
//!   [`swipe::DragState`] and a distance threshold.
//! - [`timer::Debouncer`]: coalesces a burst of triggers (for example resize
//!   events) into one firing after a quiet window.
//! - [`timer::Interval`]: a pausable periodic tick (for example slide autoplay).
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::swipe::{SwipeDirection, SwipeState};
//! use understory_event_state::timer::Debouncer;
//!
//! let mut swipe = SwipeState::new();
//! swipe.on_down(Point::new(300.0, 10.0));
//! // Pointer moved 120px to the left: advance.
//! assert_eq!(swipe.on_up(Point::new(180.0, 12.0)), Some(SwipeDirection::Next));
//!
//! let mut resize = Debouncer::new(250);
//! resize.trigger(1_000);
//! resize.trigger(1_100);
//! assert!(!resize.poll(1_300));
//! assert!(resize.poll(1_350));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod swipe;
pub mod timer;
