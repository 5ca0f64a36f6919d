// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsible navigation menu with per-item dropdowns on narrow viewports.

use core::f64::consts::FRAC_PI_4;

use kurbo::{Affine, Vec2};
use smallvec::SmallVec;

/// Widest viewport on which dropdown parents toggle instead of navigating.
pub const MENU_COLLAPSE_MAX_WIDTH: f64 = 768.0;

/// Style of one hamburger icon line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Transform applied around the line's transform origin.
    pub transform: Affine,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl LineStyle {
    /// Untransformed, fully opaque line; hosts clear inline styles for it.
    pub const RESTING: Self = Self {
        transform: Affine::IDENTITY,
        opacity: 1.0,
    };

    /// Returns `true` for [`LineStyle::RESTING`].
    #[must_use]
    pub fn is_resting(&self) -> bool {
        *self == Self::RESTING
    }
}

/// Open state for the mobile navigation menu and its dropdowns.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    open: bool,
    dropdowns: SmallVec<[bool; 4]>,
}

impl Menu {
    /// Creates a closed menu with `dropdowns` closed dropdown items.
    #[must_use]
    pub fn new(dropdowns: usize) -> Self {
        Self {
            open: false,
            dropdowns: SmallVec::from_elem(false, dropdowns),
        }
    }

    /// Returns `true` while the menu is open; mirrors the toggle's `aria-expanded`.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Opens or closes the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Document click. Closes an open menu when the click landed outside both
    /// the menu and its toggle button.
    ///
    /// Returns `true` if the menu closed.
    pub fn on_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if self.open && !inside_menu && !inside_toggle {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Click on dropdown parent `index`.
    ///
    /// On collapsed viewports the dropdown toggles and this returns `true`; the
    /// host then suppresses the link's navigation. Wider viewports navigate
    /// normally.
    pub fn on_dropdown_click(&mut self, index: usize, viewport_width: f64) -> bool {
        if viewport_width > MENU_COLLAPSE_MAX_WIDTH {
            return false;
        }
        let Some(open) = self.dropdowns.get_mut(index) else {
            tracing::debug!(index, "ignoring unknown dropdown");
            return false;
        };
        *open = !*open;
        true
    }

    /// Returns `true` if dropdown `index` is expanded.
    #[must_use]
    pub fn is_dropdown_open(&self, index: usize) -> bool {
        self.dropdowns.get(index).copied().unwrap_or(false)
    }

    /// Styles for the three hamburger lines; an open menu shows a cross.
    #[must_use]
    pub fn hamburger_lines(&self) -> [LineStyle; 3] {
        if !self.open {
            return [LineStyle::RESTING; 3];
        }
        [
            LineStyle {
                transform: Affine::rotate(FRAC_PI_4) * Affine::translate(Vec2::new(8.0, 8.0)),
                opacity: 1.0,
            },
            LineStyle {
                transform: Affine::IDENTITY,
                opacity: 0.0,
            },
            LineStyle {
                transform: Affine::rotate(-FRAC_PI_4) * Affine::translate(Vec2::new(7.0, -7.0)),
                opacity: 1.0,
            },
        ]
    }
}
