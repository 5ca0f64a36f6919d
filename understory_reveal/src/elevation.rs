// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky header elevation driven by scroll position.

use core::fmt;

use kurbo::Vec2;

/// Scroll distance past which the header lifts off the page.
pub const ELEVATION_SCROLL_THRESHOLD: f64 = 50.0;

/// Header elevation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Elevation {
    /// At or near the top of the page.
    #[default]
    Resting,
    /// Scrolled past [`ELEVATION_SCROLL_THRESHOLD`].
    Raised,
}

impl Elevation {
    /// Elevation for a vertical scroll offset.
    #[must_use]
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > ELEVATION_SCROLL_THRESHOLD {
            Self::Raised
        } else {
            Self::Resting
        }
    }

    /// Shadow to draw under the header.
    #[must_use]
    pub const fn shadow(self) -> Shadow {
        match self {
            Self::Resting => Shadow {
                offset: Vec2::new(0.0, 2.0),
                blur_radius: 8.0,
                alpha: 0.08,
            },
            Self::Raised => Shadow {
                offset: Vec2::new(0.0, 4.0),
                blur_radius: 12.0,
                alpha: 0.12,
            },
        }
    }
}

/// A black drop shadow.
///
/// `Display` renders a CSS `box-shadow` value:
///
/// ```
/// use understory_reveal::Elevation;
///
/// assert_eq!(
///     Elevation::for_scroll(120.0).shadow().to_string(),
///     "0 4px 12px rgba(0, 0, 0, 0.12)"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow offset in logical pixels.
    pub offset: Vec2,
    /// Blur radius in logical pixels.
    pub blur_radius: f64,
    /// Shadow opacity.
    pub alpha: f64,
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_length(f, self.offset.x)?;
        f.write_str(" ")?;
        write_length(f, self.offset.y)?;
        write!(f, " {}px rgba(0, 0, 0, {})", self.blur_radius, self.alpha)
    }
}

fn write_length(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{value}px")
    }
}
