// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance carousel configuration.

use understory_event_state::swipe::DEFAULT_SWIPE_THRESHOLD;
use understory_event_state::timer::RESIZE_DEBOUNCE_MS;

use crate::Breakpoints;

/// Gap between cards, in logical pixels.
pub const DEFAULT_GAP: f64 = 24.0;
/// Tighter gap some strips use on the narrowest tier.
pub const NARROW_GAP: f64 = 16.0;

/// Everything that differs between carousel instances.
///
/// Differences between strips are expressed here rather than in separate
/// controller code, so each strip's behavior can be read off its preset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CarouselConfig {
    /// Width to cards-per-view table.
    pub breakpoints: Breakpoints,
    /// Gap between adjacent cards.
    pub gap: f64,
    /// Gap override on the narrowest breakpoint tier.
    pub narrow_gap: Option<f64>,
    /// Center the first card in its container on the narrowest tier.
    pub center_first_on_narrowest: bool,
    /// `next` at the last index returns to the first (and `previous` the reverse).
    pub wrap_around: bool,
    /// Horizontal travel a drag must exceed to page.
    pub swipe_threshold: f64,
    /// Quiet window before a resize burst triggers relayout.
    pub resize_debounce_ms: u64,
}

impl CarouselConfig {
    /// Faculty strip: standard tiers, tighter centered single card on phones.
    #[must_use]
    pub fn faculty() -> Self {
        Self {
            narrow_gap: Some(NARROW_GAP),
            center_first_on_narrowest: true,
            ..Self::default()
        }
    }

    /// Testimonial strip: standard tiers, uniform gap.
    #[must_use]
    pub fn testimonials() -> Self {
        Self::default()
    }

    /// Video strip: an extra tier so media cards keep a usable width.
    #[must_use]
    pub fn videos() -> Self {
        Self {
            breakpoints: Breakpoints::wide_media(),
            ..Self::default()
        }
    }

    /// Gap that applies before any viewport width is known.
    ///
    /// A negative or non-finite `gap` is replaced by [`DEFAULT_GAP`].
    #[must_use]
    pub fn base_gap(&self) -> f64 {
        usable_gap(self.gap)
    }

    /// Gap that applies at viewport `width`.
    ///
    /// Negative or non-finite gaps are replaced by [`DEFAULT_GAP`].
    #[must_use]
    pub fn gap_at(&self, width: f64) -> f64 {
        match self.narrow_gap {
            Some(gap) if self.breakpoints.is_narrowest(width) => usable_gap(gap),
            _ => self.base_gap(),
        }
    }
}

fn usable_gap(gap: f64) -> f64 {
    if gap.is_finite() && gap >= 0.0 {
        gap
    } else {
        tracing::debug!(gap, "ignoring unusable carousel gap");
        DEFAULT_GAP
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::standard(),
            gap: DEFAULT_GAP,
            narrow_gap: None,
            center_first_on_narrowest: false,
            wrap_around: false,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_only_where_intended() {
        let faculty = CarouselConfig::faculty();
        let testimonials = CarouselConfig::testimonials();
        let videos = CarouselConfig::videos();

        assert_eq!(faculty.breakpoints, testimonials.breakpoints);
        assert_ne!(videos.breakpoints, testimonials.breakpoints);
        assert!(faculty.center_first_on_narrowest);
        assert!(!testimonials.center_first_on_narrowest);
        assert!(!videos.center_first_on_narrowest);

        for config in [&faculty, &testimonials, &videos] {
            assert!(!config.wrap_around);
            assert_eq!(config.swipe_threshold, 50.0);
            assert_eq!(config.resize_debounce_ms, 250);
        }
    }

    #[test]
    fn narrow_gap_applies_only_on_narrowest_tier() {
        let faculty = CarouselConfig::faculty();
        assert_eq!(faculty.gap_at(375.0), 16.0);
        assert_eq!(faculty.gap_at(480.0), 16.0);
        assert_eq!(faculty.gap_at(481.0), 24.0);

        let videos = CarouselConfig::videos();
        assert_eq!(videos.gap_at(375.0), 24.0);
    }

    #[test]
    fn unusable_gaps_fall_back_to_default() {
        let config = CarouselConfig {
            gap: f64::NAN,
            narrow_gap: Some(-4.0),
            ..CarouselConfig::faculty()
        };
        assert_eq!(config.base_gap(), DEFAULT_GAP);
        assert_eq!(config.gap_at(375.0), DEFAULT_GAP);
        assert_eq!(config.gap_at(1280.0), DEFAULT_GAP);

        let config = CarouselConfig {
            gap: 0.0,
            narrow_gap: Some(f64::INFINITY),
            ..CarouselConfig::faculty()
        };
        assert_eq!(config.gap_at(375.0), DEFAULT_GAP);
        assert_eq!(config.gap_at(1280.0), 0.0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn presets_survive_a_toml_round_trip() {
        let videos = CarouselConfig::videos();
        let text = toml::to_string(&videos).unwrap();
        let back: CarouselConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, videos);
    }

    #[test]
    fn unordered_breakpoint_tables_are_rejected() {
        let text = r#"
            [breakpoints]
            widest = 4
            tiers = [
              { max_width = 768.0, per_view = 2 },
              { max_width = 480.0, per_view = 1 },
            ]
        "#;
        let err = toml::from_str::<CarouselConfig>(text).unwrap_err();
        assert!(
            err.to_string().contains("must increase strictly"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn missing_fields_take_their_defaults() {
        let config: CarouselConfig = toml::from_str("gap = 20.0").unwrap();
        assert_eq!(
            config,
            CarouselConfig {
                gap: 20.0,
                ..CarouselConfig::default()
            }
        );
    }
}
