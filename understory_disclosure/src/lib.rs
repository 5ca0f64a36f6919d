// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_disclosure --heading-base-level=0

//! Understory Disclosure: open/closed state for accordions and menus.
//!
//! - [`Accordion`]: a FAQ-style list where opening one item closes the others,
//!   plus a show-more toggle that reveals overflow items.
//! - [`Menu`]: a collapsible navigation menu. It closes on clicks outside
//!   itself, toggles dropdown parents on narrow viewports, and describes the
//!   hamburger-to-cross icon as [`kurbo::Affine`] transforms.
//! - [`on_anchor_click`]: decides whether a click on an in-page `#id` link
//!   should scroll to its target instead of navigating.
//!
//! Hosts map `is_open`/`is_expanded` onto `active` classes and
//! `aria-expanded` attributes.
//!
//! ```
//! use understory_disclosure::{Accordion, Menu};
//!
//! let mut faq = Accordion::new(6);
//! faq.toggle(2);
//! faq.toggle(4);
//! assert_eq!(faq.open_item(), Some(4));
//!
//! let mut menu = Menu::new(2);
//! menu.toggle();
//! // A click inside the menu keeps it open; one elsewhere closes it.
//! assert!(!menu.on_document_click(true, false));
//! assert!(menu.on_document_click(false, false));
//! assert!(!menu.is_open());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod accordion;
mod anchor;
mod menu;

pub use accordion::{Accordion, SHOW_LESS_LABEL, SHOW_MORE_LABEL};
pub use anchor::{anchor_target, on_anchor_click};
pub use menu::{LineStyle, MENU_COLLAPSE_MAX_WIDTH, Menu};
