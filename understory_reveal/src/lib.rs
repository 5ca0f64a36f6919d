// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reveal --heading-base-level=0

//! Understory Reveal: scroll-driven presentation state for long pages.
//!
//! - [`Entrance`]: which entrance class and [`Stagger`] delay an element gets,
//!   derived from its [`Role`] and position in its grid or strip.
//! - [`RevealTracker`]: one-shot visibility tracking. Elements reveal once a
//!   share of their area (see [`RevealOptions`]) enters a viewport whose
//!   bottom edge has been pulled up, and are never tracked again.
//! - [`Elevation`]: the sticky header's shadow for the current scroll offset.
//!
//! Hosts supply element rectangles and scroll offsets; nothing here reads
//! layout or schedules callbacks.
//!
//! ```
//! use kurbo::Rect;
//! use understory_reveal::{Elevation, Entrance, RevealTracker, Role};
//!
//! let cards: Vec<Entrance> = (0..5).map(|i| Entrance::for_role(Role::OfferCard(i))).collect();
//! assert_eq!(cards[4].class_names().collect::<Vec<_>>(), ["slide-up", "stagger-1"]);
//!
//! let mut tracker = RevealTracker::default();
//! for i in 0..cards.len() {
//!     tracker.observe(i);
//! }
//! // Cards are laid out in one row, 500px below the top of an 800px viewport.
//! let row = Rect::new(0.0, 500.0, 300.0, 900.0);
//! let shown = tracker.update(Rect::new(0.0, 0.0, 1280.0, 800.0), |_| Some(row));
//! assert_eq!(shown.len(), 5);
//!
//! assert_eq!(Elevation::for_scroll(480.0), Elevation::Raised);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod elevation;
mod entrance;
mod tracker;

pub use elevation::{ELEVATION_SCROLL_THRESHOLD, Elevation, Shadow};
pub use entrance::{
    Entrance, RevealClass, Role, Stagger, VISIBLE_CLASS, cyclic_stagger, leading_stagger,
};
pub use tracker::{RevealOptions, RevealTracker};
