// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging controller for one strip of fixed-width cards.

use core::num::NonZeroUsize;

use kurbo::Point;
use understory_event_state::swipe::{DragState, SwipeDirection, SwipeState};
use understory_event_state::timer::Debouncer;

use crate::{CarouselConfig, Changes, Key, KeyInput, KeyTarget};

/// Host measurements in logical pixels.
///
/// Fields that are not finite and positive are ignored by the controller,
/// which keeps the last valid value instead.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurements {
    /// Width the breakpoint table is evaluated against.
    pub viewport_width: f64,
    /// Width of the element clipping the track.
    pub container_width: f64,
    /// Rendered width of the first card, without gap.
    pub card_width: f64,
}

/// Pointer cursor over the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Idle; the track can be grabbed.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// Navigation affordance state derived from the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavState {
    /// The previous button is disabled.
    pub prev_disabled: bool,
    /// The next button is disabled.
    pub next_disabled: bool,
    /// Number of paging dots.
    pub dot_count: usize,
    /// Index of the highlighted dot.
    pub active_dot: usize,
}

/// Paging state for one horizontal strip of `len` cards.
///
/// The controller owns the index, the drag state and the resize debounce. It
/// never touches elements: operations return [`Changes`] and the host reads
/// [`Carousel::offset`], [`Carousel::nav`], and [`Carousel::cursor`] to update
/// the track transform, buttons, dots, and cursor.
///
/// A carousel built over zero cards is inert; every operation is a no-op.
///
/// ```
/// use understory_carousel::{Carousel, CarouselConfig, Changes, Measurements};
///
/// let desktop = Measurements {
///     viewport_width: 1280.0,
///     container_width: 1200.0,
///     card_width: 282.0,
/// };
/// let mut carousel = Carousel::new(6, CarouselConfig::testimonials(), desktop);
/// assert_eq!(carousel.per_view(), 4);
/// assert_eq!(carousel.max_index(), 2);
/// assert_eq!(carousel.dot_count(), 2);
///
/// assert!(carousel.next().contains(Changes::OFFSET));
/// assert!(carousel.next().contains(Changes::OFFSET));
/// // At the end: silently ignored.
/// assert!(carousel.next().is_empty());
/// assert_eq!(carousel.index(), 2);
/// assert_eq!(carousel.offset(), -2.0 * (282.0 + 24.0));
/// ```
#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    len: usize,
    index: usize,
    viewport_width: Option<f64>,
    container_width: Option<f64>,
    card_width: Option<f64>,
    section_present: bool,
    swipe: SwipeState,
    resize: Debouncer,
}

impl Carousel {
    /// Creates a controller over `len` cards showing the first card.
    #[must_use]
    pub fn new(len: usize, config: CarouselConfig, measurements: Measurements) -> Self {
        let swipe = SwipeState::with_threshold(config.swipe_threshold);
        let resize = Debouncer::new(config.resize_debounce_ms);
        let mut carousel = Self {
            config,
            len,
            index: 0,
            viewport_width: None,
            container_width: None,
            card_width: None,
            section_present: true,
            swipe,
            resize,
        };
        if len == 0 {
            tracing::debug!("carousel has no cards; controller is inert");
        } else {
            carousel.apply_measurements(measurements);
        }
        carousel
    }

    /// Configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Number of cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the controller ignores all input (no cards).
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.is_empty()
    }

    /// Index of the left-most visible card.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Cards visible at once at the current viewport width.
    #[must_use]
    pub fn per_view(&self) -> usize {
        self.per_view_nz().get()
    }

    fn per_view_nz(&self) -> NonZeroUsize {
        let breakpoints = &self.config.breakpoints;
        self.viewport_width
            .map_or(breakpoints.widest(), |width| breakpoints.per_view(width))
    }

    /// Largest valid index: `len - per_view`, or `0` when everything fits.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.per_view())
    }

    /// Distance between the left edges of adjacent cards.
    ///
    /// Zero until a valid card width has been measured.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        let Some(card) = self.card_width else {
            return 0.0;
        };
        let gap = self
            .viewport_width
            .map_or(self.config.base_gap(), |width| self.config.gap_at(width));
        card + gap
    }

    /// Horizontal track translation in logical pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        let shift = -(self.index as f64) * self.pitch();
        match (self.centering_inset(), self.index) {
            (Some(inset), 0) => inset,
            (Some(inset), _) => inset + shift,
            (None, _) => shift,
        }
    }

    fn centering_inset(&self) -> Option<f64> {
        if !self.config.center_first_on_narrowest {
            return None;
        }
        let viewport = self.viewport_width?;
        if !self.config.breakpoints.is_narrowest(viewport) {
            return None;
        }
        let container = self.container_width?;
        let card = self.card_width?;
        Some((container - card) / 2.0)
    }

    /// Number of paging dots: one per `per_view` cards, rounded up.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.len.div_ceil(self.per_view())
    }

    /// Index of the highlighted dot.
    #[must_use]
    pub fn active_dot(&self) -> usize {
        self.index / self.per_view()
    }

    /// Returns `true` if dot `dot` is the highlighted one.
    #[must_use]
    pub fn is_dot_active(&self, dot: usize) -> bool {
        !self.is_inert() && dot == self.active_dot()
    }

    /// The previous button is disabled.
    #[must_use]
    pub fn prev_disabled(&self) -> bool {
        if self.config.wrap_around {
            self.max_index() == 0
        } else {
            self.index == 0
        }
    }

    /// The next button is disabled.
    #[must_use]
    pub fn next_disabled(&self) -> bool {
        if self.config.wrap_around {
            self.max_index() == 0
        } else {
            self.index >= self.max_index()
        }
    }

    /// Buttons and dots, derived from the current state.
    #[must_use]
    pub fn nav(&self) -> NavState {
        NavState {
            prev_disabled: self.prev_disabled(),
            next_disabled: self.next_disabled(),
            dot_count: self.dot_count(),
            active_dot: self.active_dot(),
        }
    }

    /// Cursor to show over the track.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        if self.swipe.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }

    /// Current pointer interaction state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.swipe.state()
    }

    /// Whether this carousel's section is in the document.
    #[must_use]
    pub const fn section_present(&self) -> bool {
        self.section_present
    }

    /// Records whether this carousel's section is in the document.
    ///
    /// Arrow keys are ignored while the section is absent.
    pub fn set_section_present(&mut self, present: bool) {
        self.section_present = present;
    }

    /// Shows `index` as the left-most card, clamped into `0..=max_index`.
    pub fn go_to(&mut self, index: usize) -> Changes {
        if self.is_inert() {
            return Changes::empty();
        }
        let before = self.snapshot();
        let target = index.min(self.max_index());
        if target != self.index {
            tracing::trace!(from = self.index, to = target, "carousel moved");
            self.index = target;
        }
        self.diff(before)
    }

    /// Advances by one card. Ignored at the end unless the config wraps.
    pub fn next(&mut self) -> Changes {
        if self.index < self.max_index() {
            self.go_to(self.index + 1)
        } else if self.config.wrap_around {
            self.go_to(0)
        } else {
            Changes::empty()
        }
    }

    /// Goes back by one card. Ignored at the start unless the config wraps.
    pub fn previous(&mut self) -> Changes {
        if self.index > 0 {
            self.go_to(self.index - 1)
        } else if self.config.wrap_around {
            self.go_to(self.max_index())
        } else {
            Changes::empty()
        }
    }

    /// Jumps to the page represented by paging dot `dot`.
    ///
    /// Dots outside `0..dot_count()` are ignored.
    pub fn select_dot(&mut self, dot: usize) -> Changes {
        if dot >= self.dot_count() {
            tracing::debug!(dot, dots = self.dot_count(), "ignoring unknown paging dot");
            return Changes::empty();
        }
        self.go_to(dot.saturating_mul(self.per_view()))
    }

    /// Notes a viewport resize; relayout happens once resizes stop.
    ///
    /// See [`Carousel::poll_resize`].
    pub fn on_resize(&mut self, now: u64) {
        if !self.is_inert() {
            self.resize.trigger(now);
        }
    }

    /// Relayouts with `measurements` if the resize quiet window has elapsed.
    pub fn poll_resize(&mut self, now: u64, measurements: Measurements) -> Changes {
        if self.resize.poll(now) {
            self.relayout(measurements)
        } else {
            Changes::empty()
        }
    }

    /// Returns `true` while a debounced relayout is pending.
    #[must_use]
    pub const fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Returns `true` once the resize quiet window has elapsed at `now`.
    ///
    /// Hosts can check this before taking measurements for
    /// [`Carousel::poll_resize`].
    #[must_use]
    pub fn resize_due(&self, now: u64) -> bool {
        self.resize.deadline().is_some_and(|deadline| now >= deadline)
    }

    /// Recomputes cards per view and pitch, clamping the index if needed.
    pub fn relayout(&mut self, measurements: Measurements) -> Changes {
        if self.is_inert() {
            return Changes::empty();
        }
        let before = self.snapshot();
        self.apply_measurements(measurements);
        let max = self.max_index();
        if self.index > max {
            tracing::trace!(from = self.index, to = max, "clamping after relayout");
            self.index = max;
        }
        self.diff(before)
    }

    /// Pointer pressed on the track.
    ///
    /// Hosts should always suppress the default action of a press on the
    /// track (text selection, image drag), whatever this returns. The result
    /// only reports whether the grab cursor needs updating, which is not the
    /// case for a repeated press during a drag.
    pub fn on_pointer_down(&mut self, position: Point) -> Changes {
        if self.is_inert() {
            return Changes::empty();
        }
        let was_dragging = self.swipe.is_dragging();
        self.swipe.on_down(position);
        if was_dragging {
            Changes::empty()
        } else {
            Changes::CURSOR
        }
    }

    /// Pointer moved. Returns `true` if the host should suppress default behavior.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        self.swipe.on_move(position)
    }

    /// Pointer released; pages once if the drag travelled far enough.
    pub fn on_pointer_up(&mut self, position: Point) -> Changes {
        let was_dragging = self.swipe.is_dragging();
        let mut changes = match self.swipe.on_up(position) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Previous) => self.previous(),
            None => Changes::empty(),
        };
        if was_dragging {
            changes |= Changes::CURSOR;
        }
        changes
    }

    /// Pointer interaction abandoned (for example the pointer left the window).
    pub fn on_pointer_cancel(&mut self) -> Changes {
        if self.swipe.cancel() {
            Changes::CURSOR
        } else {
            Changes::empty()
        }
    }

    /// Arrow-key paging.
    ///
    /// Ignored while focus is in a text control or the section is absent.
    pub fn on_key(&mut self, input: KeyInput) -> Changes {
        if self.is_inert() || !self.section_present || input.target == KeyTarget::TextInput {
            return Changes::empty();
        }
        match input.key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Other => Changes::empty(),
        }
    }

    fn apply_measurements(&mut self, m: Measurements) {
        Self::update_dimension(&mut self.viewport_width, m.viewport_width, "viewport");
        Self::update_dimension(&mut self.container_width, m.container_width, "container");
        Self::update_dimension(&mut self.card_width, m.card_width, "card");
    }

    fn update_dimension(slot: &mut Option<f64>, value: f64, what: &'static str) {
        if value.is_finite() && value > 0.0 {
            *slot = Some(value);
        } else {
            tracing::debug!(what, value, "ignoring invalid measurement; keeping previous");
        }
    }

    fn snapshot(&self) -> (f64, NavState) {
        (self.offset(), self.nav())
    }

    fn diff(&self, (offset, nav): (f64, NavState)) -> Changes {
        let now = self.nav();
        let mut changes = Changes::empty();
        if self.offset() != offset {
            changes |= Changes::OFFSET;
        }
        if now.prev_disabled != nav.prev_disabled || now.next_disabled != nav.next_disabled {
            changes |= Changes::BUTTONS;
        }
        if now.dot_count != nav.dot_count {
            changes |= Changes::DOTS_REBUILT | Changes::ACTIVE_DOT;
        }
        if now.active_dot != nav.active_dot {
            changes |= Changes::ACTIVE_DOT;
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Breakpoint, Breakpoints};

    const DESKTOP: Measurements = Measurements {
        viewport_width: 1280.0,
        container_width: 1200.0,
        card_width: 282.0,
    };

    const TABLET: Measurements = Measurements {
        viewport_width: 700.0,
        container_width: 660.0,
        card_width: 318.0,
    };

    const PHONE: Measurements = Measurements {
        viewport_width: 375.0,
        container_width: 343.0,
        card_width: 300.0,
    };

    fn testimonials(len: usize) -> Carousel {
        Carousel::new(len, CarouselConfig::testimonials(), DESKTOP)
    }

    #[test]
    fn six_cards_on_desktop_page_to_two_and_stop() {
        let mut c = testimonials(6);
        assert_eq!(c.per_view(), 4);
        assert_eq!(c.max_index(), 2);
        assert_eq!(c.dot_count(), 2);
        assert!(c.prev_disabled());
        assert!(!c.next_disabled());

        let changes = c.next();
        assert!(changes.contains(Changes::OFFSET | Changes::BUTTONS));
        assert_eq!(c.index(), 1);
        let changes = c.next();
        assert!(changes.contains(Changes::OFFSET | Changes::BUTTONS));
        assert_eq!(c.index(), 2);
        assert!(c.next_disabled());

        assert!(c.next().is_empty());
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn content_narrower_than_viewport_is_static() {
        let mut c = testimonials(3);
        assert_eq!(c.max_index(), 0);
        assert_eq!(c.dot_count(), 1);
        assert!(c.prev_disabled());
        assert!(c.next_disabled());
        assert!(c.next().is_empty());
        assert!(c.previous().is_empty());
        assert!(c.go_to(5).is_empty());
        assert!(c.select_dot(0).is_empty());
        assert_eq!(c.index(), 0);
        assert!(c.is_dot_active(0));
    }

    #[test]
    fn previous_at_start_is_a_no_op() {
        let mut c = testimonials(10);
        assert!(c.previous().is_empty());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn go_to_clamps_and_updates_everything() {
        let mut c = testimonials(10);
        let changes = c.go_to(100);
        assert_eq!(c.index(), 6);
        assert_eq!(
            changes,
            Changes::OFFSET | Changes::BUTTONS | Changes::ACTIVE_DOT
        );
        assert_eq!(
            c.nav(),
            NavState {
                prev_disabled: false,
                next_disabled: true,
                dot_count: 3,
                active_dot: 1,
            }
        );
        assert!(c.go_to(6).is_empty());
    }

    #[test]
    fn dots_select_pages_and_clamp() {
        let mut c = testimonials(6);
        let changes = c.select_dot(1);
        // Dot 1 asks for index 4 which clamps to 2; 2 / 4 puts the highlight back on dot 0.
        assert_eq!(c.index(), 2);
        assert_eq!(c.active_dot(), 0);
        assert!(changes.contains(Changes::OFFSET));
        assert!(!changes.contains(Changes::ACTIVE_DOT));
        assert_eq!((0..c.dot_count()).filter(|&d| c.is_dot_active(d)).count(), 1);

        assert!(c.select_dot(2).is_empty());
        assert_eq!(c.select_dot(0), Changes::OFFSET | Changes::BUTTONS);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn offset_is_index_times_pitch() {
        let mut c = testimonials(10);
        assert_eq!(c.pitch(), 306.0);
        assert_eq!(c.offset(), 0.0);
        c.go_to(2);
        assert_eq!(c.offset(), -612.0);
    }

    #[test]
    fn faculty_centers_first_card_on_phones() {
        let mut c = Carousel::new(8, CarouselConfig::faculty(), PHONE);
        assert_eq!(c.per_view(), 1);
        assert_eq!(c.pitch(), 316.0);
        assert_eq!(c.offset(), 21.5);
        c.next();
        assert_eq!(c.offset(), 21.5 - 316.0);

        // Same strip on desktop: no centering, standard gap.
        c.relayout(DESKTOP);
        assert_eq!(c.pitch(), 306.0);
        assert_eq!(c.offset(), -306.0);
    }

    #[test]
    fn testimonials_do_not_center_on_phones() {
        let c = Carousel::new(8, CarouselConfig::testimonials(), PHONE);
        assert_eq!(c.pitch(), 324.0);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn widening_viewport_keeps_index_when_in_range() {
        let mut c = Carousel::new(
            10,
            CarouselConfig::testimonials(),
            Measurements {
                card_width: 300.0,
                ..DESKTOP
            },
        );
        c.go_to(6);
        let changes = c.relayout(TABLET);
        assert_eq!(c.per_view(), 2);
        assert_eq!(c.max_index(), 8);
        assert_eq!(c.index(), 6);
        assert!(changes.contains(Changes::DOTS_REBUILT));
        assert!(changes.contains(Changes::ACTIVE_DOT));
        assert!(changes.contains(Changes::BUTTONS));
        assert!(changes.contains(Changes::OFFSET));
        assert_eq!(c.dot_count(), 5);
        assert_eq!(c.active_dot(), 3);
    }

    #[test]
    fn shrinking_capacity_clamps_index() {
        let mut c = Carousel::new(10, CarouselConfig::testimonials(), TABLET);
        c.go_to(8);
        assert_eq!(c.index(), 8);
        c.relayout(DESKTOP);
        assert_eq!(c.per_view(), 4);
        assert_eq!(c.max_index(), 6);
        assert_eq!(c.index(), 6);
        assert!(c.next_disabled());
    }

    #[test]
    fn invalid_measurements_keep_previous_values() {
        let mut c = testimonials(10);
        c.go_to(3);
        let changes = c.relayout(Measurements {
            viewport_width: 0.0,
            container_width: f64::NAN,
            card_width: -1.0,
        });
        assert!(changes.is_empty());
        assert_eq!(c.per_view(), 4);
        assert_eq!(c.pitch(), 306.0);
    }

    #[test]
    fn unmeasured_carousel_uses_widest_tier_and_zero_pitch() {
        let mut c = Carousel::new(6, CarouselConfig::videos(), Measurements::default());
        assert_eq!(c.per_view(), 4);
        assert_eq!(c.pitch(), 0.0);
        c.next();
        assert_eq!(c.index(), 1);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn videos_use_their_own_medium_tier() {
        let m = Measurements {
            viewport_width: 1000.0,
            ..DESKTOP
        };
        let videos = Carousel::new(6, CarouselConfig::videos(), m);
        let faculty = Carousel::new(6, CarouselConfig::faculty(), m);
        assert_eq!(videos.per_view(), 2);
        assert_eq!(faculty.per_view(), 3);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = testimonials(0);
        assert!(c.is_inert());
        assert_eq!(c.dot_count(), 0);
        assert!(!c.is_dot_active(0));
        assert!(c.next().is_empty());
        assert!(c.previous().is_empty());
        assert!(c.go_to(3).is_empty());
        assert!(c.select_dot(0).is_empty());
        assert!(c.relayout(TABLET).is_empty());
        assert!(c.on_pointer_down(Point::new(0.0, 0.0)).is_empty());
        assert!(c.on_key(KeyInput::new(Key::ArrowRight)).is_empty());
        c.on_resize(0);
        assert!(!c.resize_pending());
    }

    #[test]
    fn swipe_below_threshold_never_moves() {
        let mut c = testimonials(10);
        assert_eq!(c.on_pointer_down(Point::new(300.0, 0.0)), Changes::CURSOR);
        assert_eq!(c.cursor(), Cursor::Grabbing);
        assert!(c.on_pointer_move(Point::new(280.0, 0.0)));
        assert_eq!(c.on_pointer_up(Point::new(250.0, 0.0)), Changes::CURSOR);
        assert_eq!(c.index(), 0);
        assert_eq!(c.cursor(), Cursor::Grab);
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn repeated_press_keeps_dragging_without_cursor_change() {
        let mut c = testimonials(10);
        assert_eq!(c.on_pointer_down(Point::new(300.0, 0.0)), Changes::CURSOR);
        assert!(c.on_pointer_down(Point::new(320.0, 0.0)).is_empty());
        assert_eq!(c.cursor(), Cursor::Grabbing);
        assert_eq!(c.drag_state(), DragState::Dragging { start_x: 320.0 });
        assert!(c.on_pointer_up(Point::new(200.0, 0.0)).contains(Changes::CURSOR));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn swipe_left_advances_once_and_right_goes_back() {
        let mut c = testimonials(10);
        c.on_pointer_down(Point::new(300.0, 0.0));
        let changes = c.on_pointer_up(Point::new(100.0, 0.0));
        assert!(changes.contains(Changes::OFFSET | Changes::CURSOR));
        assert_eq!(c.index(), 1);

        c.on_pointer_down(Point::new(100.0, 0.0));
        c.on_pointer_up(Point::new(151.0, 0.0));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut c = testimonials(10);
        assert!(c.on_pointer_up(Point::new(0.0, 0.0)).is_empty());
        assert!(!c.on_pointer_move(Point::new(0.0, 0.0)));
        assert!(c.on_pointer_cancel().is_empty());
    }

    #[test]
    fn pointer_cancel_resets_drag() {
        let mut c = testimonials(10);
        c.on_pointer_down(Point::new(300.0, 0.0));
        assert_eq!(c.on_pointer_cancel(), Changes::CURSOR);
        assert!(c.on_pointer_up(Point::new(0.0, 0.0)).is_empty());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn arrow_keys_page_unless_typing_or_hidden() {
        let mut c = testimonials(10);
        assert!(!c.on_key(KeyInput::new(Key::ArrowRight)).is_empty());
        assert_eq!(c.index(), 1);

        assert!(c.on_key(KeyInput::from_dom("ArrowRight", "INPUT")).is_empty());
        assert!(c.on_key(KeyInput::new(Key::Other)).is_empty());
        assert_eq!(c.index(), 1);

        c.set_section_present(false);
        assert!(c.on_key(KeyInput::new(Key::ArrowLeft)).is_empty());
        c.set_section_present(true);
        c.on_key(KeyInput::new(Key::ArrowLeft));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn resize_is_debounced() {
        let mut c = testimonials(10);
        c.go_to(6);
        c.on_resize(1000);
        c.on_resize(1100);
        assert!(!c.resize_due(1300));
        assert!(c.poll_resize(1300, TABLET).is_empty());
        assert_eq!(c.per_view(), 4);
        assert!(c.resize_pending());
        assert!(c.resize_due(1350));

        let changes = c.poll_resize(1350, TABLET);
        assert!(changes.contains(Changes::DOTS_REBUILT));
        assert_eq!(c.per_view(), 2);
        assert!(!c.resize_pending());
        assert!(!c.resize_due(2000));
        assert!(c.poll_resize(2000, DESKTOP).is_empty());
    }

    #[test]
    fn wrap_around_config_cycles() {
        let config = CarouselConfig {
            wrap_around: true,
            ..CarouselConfig::testimonials()
        };
        let mut c = Carousel::new(6, config, DESKTOP);
        assert!(!c.prev_disabled());
        c.previous();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);

        let config = CarouselConfig {
            wrap_around: true,
            ..CarouselConfig::testimonials()
        };
        let mut small = Carousel::new(2, config, DESKTOP);
        assert!(small.prev_disabled() && small.next_disabled());
        assert!(small.next().is_empty());
    }

    #[test]
    fn custom_breakpoints_drive_per_view() {
        let config = CarouselConfig {
            breakpoints: Breakpoints::new(
                [Breakpoint::new(600.0, NonZeroUsize::MIN)],
                NonZeroUsize::new(5).unwrap(),
            )
            .unwrap(),
            ..CarouselConfig::default()
        };
        let c = Carousel::new(12, config, DESKTOP);
        assert_eq!(c.per_view(), 5);
        assert_eq!(c.dot_count(), 3);
        assert_eq!(c.max_index(), 7);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        #[derive(Clone, Debug)]
        enum Op {
            Next,
            Previous,
            GoTo(usize),
            Dot(usize),
            Resize(f64),
            Swipe(f64, f64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                Just(Op::Next),
                Just(Op::Previous),
                (0_usize..64).prop_map(Op::GoTo),
                (0_usize..16).prop_map(Op::Dot),
                (-10.0_f64..2000.0).prop_map(Op::Resize),
                (0.0_f64..800.0, 0.0_f64..800.0).prop_map(|(a, b)| Op::Swipe(a, b)),
            ]
        }

        proptest! {
            #[test]
            fn index_stays_within_bounds(
                len in 1_usize..40,
                width in 200.0_f64..2000.0,
                ops in proptest::collection::vec(op(), 0..64),
            ) {
                let m = Measurements { viewport_width: width, ..DESKTOP };
                let mut c = Carousel::new(len, CarouselConfig::videos(), m);
                for op in ops {
                    match op {
                        Op::Next => { c.next(); }
                        Op::Previous => { c.previous(); }
                        Op::GoTo(i) => { c.go_to(i); }
                        Op::Dot(d) => { c.select_dot(d); }
                        Op::Resize(w) => { c.relayout(Measurements { viewport_width: w, ..m }); }
                        Op::Swipe(from, to) => {
                            c.on_pointer_down(Point::new(from, 0.0));
                            c.on_pointer_up(Point::new(to, 0.0));
                        }
                    }
                    prop_assert_eq!(c.max_index(), len.saturating_sub(c.per_view()));
                    prop_assert!(c.index() <= c.max_index());
                    prop_assert_eq!(c.dot_count(), len.div_ceil(c.per_view()));
                    let active = (0..c.dot_count()).filter(|&d| c.is_dot_active(d)).count();
                    prop_assert_eq!(active, 1);
                    prop_assert_eq!(c.drag_state(), DragState::Idle);
                }
            }

            #[test]
            fn boundary_steps_are_idempotent(len in 1_usize..40, width in 200.0_f64..2000.0) {
                let m = Measurements { viewport_width: width, ..DESKTOP };
                let mut c = Carousel::new(len, CarouselConfig::faculty(), m);
                c.go_to(usize::MAX);
                let offset = c.offset();
                prop_assert!(c.next().is_empty());
                prop_assert_eq!(c.index(), c.max_index());
                prop_assert_eq!(c.offset(), offset);

                c.go_to(0);
                prop_assert!(c.previous().is_empty());
                prop_assert_eq!(c.index(), 0);
            }

            #[test]
            fn every_dot_lands_on_a_valid_index(len in 1_usize..40, width in 200.0_f64..2000.0) {
                let m = Measurements { viewport_width: width, ..DESKTOP };
                let mut c = Carousel::new(len, CarouselConfig::testimonials(), m);
                for dot in 0..c.dot_count() {
                    c.select_dot(dot);
                    prop_assert!(c.index() <= c.max_index());
                    prop_assert_eq!(c.active_dot(), c.index() / c.per_view());
                    prop_assert!(c.active_dot() < c.dot_count());
                }
            }

            #[test]
            fn short_drags_never_move(len in 1_usize..40, start in 0.0_f64..800.0, delta in -49.0_f64..=49.0) {
                let mut c = Carousel::new(len, CarouselConfig::testimonials(), DESKTOP);
                c.go_to(len / 2);
                let index = c.index();
                c.on_pointer_down(Point::new(start, 0.0));
                c.on_pointer_up(Point::new(start - delta, 0.0));
                prop_assert_eq!(c.index(), index);
            }
        }
    }
}
