// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: paging controllers for horizontal card strips.
//!
//! This crate holds the state behind responsive card carousels without
//! knowing anything about elements, styles, or event loops. It is shared by
//! several differently configured strips on the same page.
//!
//! The core concepts are:
//!
//! - [`Breakpoints`]: an ordered viewport-width table that decides how many
//!   cards are visible at once.
//! - [`CarouselConfig`]: everything that differs between instances (table,
//!   gap, first-card centering, wrapping, swipe threshold, resize debounce),
//!   with presets for the faculty, testimonial, and video strips.
//! - [`Carousel`]: the controller. It owns the current index, drag state, and
//!   resize debounce, and answers layout queries such as [`Carousel::offset`]
//!   and [`Carousel::nav`].
//! - [`Changes`]: what the host must rewrite after an operation.
//! - [`CarouselGroup`]: forwards window-level key and resize events to every
//!   carousel on a page.
//! - [`HeroSlider`]: a single-slide, wrapping slider with autoplay.
//!
//! Hosts are responsible for:
//!
//! - Measuring the viewport, container, and first card and passing
//!   [`Measurements`] in.
//! - Forwarding pointer, key, and resize events along with a millisecond
//!   timestamp, and polling debounces and autoplay from their own timers.
//! - Applying `translateX(offset)` to the track and rebuilding buttons and
//!   dots as the returned [`Changes`] indicate.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselConfig, Changes, Measurements};
//!
//! let tablet = Measurements {
//!     viewport_width: 700.0,
//!     container_width: 660.0,
//!     card_width: 318.0,
//! };
//! let mut faculty = Carousel::new(8, CarouselConfig::faculty(), tablet);
//! assert_eq!(faculty.per_view(), 2);
//! assert_eq!(faculty.dot_count(), 4);
//!
//! let changes = faculty.select_dot(2);
//! assert!(changes.contains(Changes::OFFSET | Changes::ACTIVE_DOT));
//! assert_eq!(faculty.index(), 4);
//! assert_eq!(faculty.offset(), -4.0 * (318.0 + 24.0));
//!
//! // The phone breakpoint shows one centered card with a tighter gap.
//! let phone = Measurements {
//!     viewport_width: 375.0,
//!     container_width: 343.0,
//!     card_width: 300.0,
//! };
//! let changes = faculty.relayout(phone);
//! assert!(changes.contains(Changes::DOTS_REBUILT));
//! assert_eq!(faculty.dot_count(), 8);
//! assert_eq!(faculty.offset(), 21.5 - 4.0 * 316.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std` and `tracing/std`.
//! - `libm`: `no_std` float support through `kurbo/libm`.
//! - `serde`: (de)serialize [`CarouselConfig`] and [`Breakpoints`]; tables are
//!   validated on the way in.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoint;
mod carousel;
mod changes;
mod config;
mod group;
mod hero;
mod input;

pub use breakpoint::{
    Breakpoint, BreakpointError, Breakpoints, LARGE_MAX_WIDTH, MEDIUM_MAX_WIDTH,
    MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH,
};
pub use carousel::{Carousel, Cursor, Measurements, NavState};
pub use changes::Changes;
pub use config::{CarouselConfig, DEFAULT_GAP, NARROW_GAP};
pub use group::{CarouselGroup, GroupChanges};
pub use hero::{HERO_AUTOPLAY_MS, HeroSlider};
pub use input::{Key, KeyInput, KeyTarget};
