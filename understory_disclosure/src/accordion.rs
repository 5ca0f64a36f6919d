// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-open accordion with a show-more toggle for overflow items.

/// Label for the show-more control while overflow items are hidden.
pub const SHOW_MORE_LABEL: &str = "Show More";
/// Label for the show-more control while overflow items are shown.
pub const SHOW_LESS_LABEL: &str = "Show Less";

/// A list of collapsible items where at most one is open.
///
/// Items beyond the initially visible set are governed by a separate
/// show-more toggle; opening and closing items is independent of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
    expanded: bool,
}

impl Accordion {
    /// Creates an accordion over `len` items, all closed and overflow hidden.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            open: None,
            expanded: false,
        }
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Toggles item `index`, closing any other open item.
    ///
    /// Clicking the open item closes it. Returns `false` for an unknown index.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring unknown accordion item");
            return false;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    /// Returns `true` if item `index` is open; mirrors its `aria-expanded`.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// The open item, if any.
    #[must_use]
    pub const fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Flips overflow visibility. Returns the new state.
    pub fn toggle_show_more(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Returns `true` while overflow items are shown.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Text for the show-more control.
    #[must_use]
    pub const fn show_more_label(&self) -> &'static str {
        if self.expanded {
            SHOW_LESS_LABEL
        } else {
            SHOW_MORE_LABEL
        }
    }
}
