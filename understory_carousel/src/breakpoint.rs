// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width breakpoints that select how many cards are visible at once.

use core::num::NonZeroUsize;

use smallvec::SmallVec;

const ONE: NonZeroUsize = NonZeroUsize::MIN;
const TWO: NonZeroUsize = NonZeroUsize::new(2).unwrap();
const THREE: NonZeroUsize = NonZeroUsize::new(3).unwrap();
const FOUR: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Widest viewport, in logical pixels, of the phone tier.
pub const MOBILE_MAX_WIDTH: f64 = 480.0;
/// Widest viewport, in logical pixels, of the tablet tier.
pub const TABLET_MAX_WIDTH: f64 = 768.0;
/// Widest viewport, in logical pixels, of the small-laptop tier.
pub const MEDIUM_MAX_WIDTH: f64 = 1024.0;
/// Widest viewport, in logical pixels, of the extra tier used by media strips.
pub const LARGE_MAX_WIDTH: f64 = 1200.0;

/// One tier of a [`Breakpoints`] table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Widest viewport (inclusive) this tier applies to.
    pub max_width: f64,
    /// Number of cards visible in this tier.
    pub per_view: NonZeroUsize,
}

impl Breakpoint {
    /// Creates a tier.
    #[must_use]
    pub const fn new(max_width: f64, per_view: NonZeroUsize) -> Self {
        Self {
            max_width,
            per_view,
        }
    }
}

/// Reasons a breakpoint table is rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum BreakpointError {
    /// A tier width was NaN, infinite, zero, or negative.
    #[error("breakpoint width must be finite and positive, got {0}")]
    InvalidWidth(f64),
    /// Tiers were not listed narrowest first.
    #[error("breakpoint widths must increase strictly, got {next} after {previous}")]
    NotIncreasing {
        /// Width of the earlier tier.
        previous: f64,
        /// Width of the tier that followed it.
        next: f64,
    },
}

/// An ordered table mapping viewport width to cards per view.
///
/// Tiers are evaluated narrowest first and a width equal to a tier's
/// `max_width` belongs to that tier, so ties resolve to the narrower value.
/// Widths beyond the last tier use [`Breakpoints::widest`].
///
/// ```
/// use understory_carousel::Breakpoints;
///
/// let table = Breakpoints::standard();
/// assert_eq!(table.per_view(480.0).get(), 1);
/// assert_eq!(table.per_view(481.0).get(), 2);
/// assert_eq!(table.per_view(1024.0).get(), 3);
/// assert_eq!(table.per_view(1920.0).get(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BreakpointTable", into = "BreakpointTable")
)]
pub struct Breakpoints {
    tiers: SmallVec<[Breakpoint; 4]>,
    widest: NonZeroUsize,
}

impl Breakpoints {
    /// Builds a table from tiers listed narrowest first.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointError`] if a width is not finite and positive or the
    /// widths are not strictly increasing.
    pub fn new(
        tiers: impl IntoIterator<Item = Breakpoint>,
        widest: NonZeroUsize,
    ) -> Result<Self, BreakpointError> {
        let tiers: SmallVec<[Breakpoint; 4]> = tiers.into_iter().collect();
        let mut previous: Option<f64> = None;
        for tier in &tiers {
            if !tier.max_width.is_finite() || tier.max_width <= 0.0 {
                return Err(BreakpointError::InvalidWidth(tier.max_width));
            }
            if let Some(previous) = previous
                && tier.max_width <= previous
            {
                return Err(BreakpointError::NotIncreasing {
                    previous,
                    next: tier.max_width,
                });
            }
            previous = Some(tier.max_width);
        }
        Ok(Self { tiers, widest })
    }

    /// Phone 1, tablet 2, small laptop 3, otherwise 4.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tiers: SmallVec::from_slice(&[
                Breakpoint::new(MOBILE_MAX_WIDTH, ONE),
                Breakpoint::new(TABLET_MAX_WIDTH, TWO),
                Breakpoint::new(MEDIUM_MAX_WIDTH, THREE),
            ]),
            widest: FOUR,
        }
    }

    /// Phone 1, tablet and small laptop 2, large laptop 3, otherwise 4.
    ///
    /// Used by strips whose cards carry embedded media and need more room.
    #[must_use]
    pub fn wide_media() -> Self {
        Self {
            tiers: SmallVec::from_slice(&[
                Breakpoint::new(MOBILE_MAX_WIDTH, ONE),
                Breakpoint::new(TABLET_MAX_WIDTH, TWO),
                Breakpoint::new(MEDIUM_MAX_WIDTH, TWO),
                Breakpoint::new(LARGE_MAX_WIDTH, THREE),
            ]),
            widest: FOUR,
        }
    }

    /// Tiers, narrowest first.
    #[must_use]
    pub fn tiers(&self) -> &[Breakpoint] {
        &self.tiers
    }

    /// Cards per view beyond the last tier.
    #[must_use]
    pub const fn widest(&self) -> NonZeroUsize {
        self.widest
    }

    /// Index of the tier `width` falls into; `tiers().len()` means "wider than all tiers".
    #[must_use]
    pub fn tier(&self, width: f64) -> usize {
        self.tiers
            .iter()
            .position(|tier| width <= tier.max_width)
            .unwrap_or(self.tiers.len())
    }

    /// Returns `true` if `width` falls into the first (narrowest) tier.
    #[must_use]
    pub fn is_narrowest(&self, width: f64) -> bool {
        !self.tiers.is_empty() && self.tier(width) == 0
    }

    /// Cards per view at `width`.
    #[must_use]
    pub fn per_view(&self, width: f64) -> NonZeroUsize {
        self.tiers
            .get(self.tier(width))
            .map_or(self.widest, |tier| tier.per_view)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BreakpointTable {
    tiers: alloc::vec::Vec<Breakpoint>,
    widest: NonZeroUsize,
}

#[cfg(feature = "serde")]
impl TryFrom<BreakpointTable> for Breakpoints {
    type Error = BreakpointError;

    fn try_from(table: BreakpointTable) -> Result<Self, Self::Error> {
        Self::new(table.tiers, table.widest)
    }
}

#[cfg(feature = "serde")]
impl From<Breakpoints> for BreakpointTable {
    fn from(breakpoints: Breakpoints) -> Self {
        Self {
            tiers: breakpoints.tiers.into_vec(),
            widest: breakpoints.widest,
        }
    }
}
