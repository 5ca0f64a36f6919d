// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full-width, single-slide hero slider with autoplay.
//!
//! Unlike [`Carousel`](crate::Carousel), the hero slider wraps: `next` on the
//! last slide shows the first one. It also advances on its own every
//! [`HERO_AUTOPLAY_MS`] while the pointer is not over it.

use kurbo::Point;
use understory_event_state::swipe::{SwipeDirection, SwipeState};
use understory_event_state::timer::Interval;

/// Autoplay period.
pub const HERO_AUTOPLAY_MS: u64 = 5000;

/// Wrapping slide state with autoplay and swipe support.
///
/// Every method that can change the visible slide returns `true` when it did;
/// the host then moves the `active` class (and `aria-selected` on dots) to
/// [`HeroSlider::current`].
///
/// ```
/// use understory_carousel::HeroSlider;
///
/// let mut hero = HeroSlider::new(3, 0);
/// assert_eq!(hero.current(), Some(0));
/// assert!(hero.previous());
/// assert_eq!(hero.current(), Some(2));
///
/// // Autoplay advances once per period.
/// assert!(hero.tick(5_000));
/// assert_eq!(hero.current(), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct HeroSlider {
    len: usize,
    current: usize,
    autoplay: Interval,
    swipe: SwipeState,
}

impl HeroSlider {
    /// Shows the first of `len` slides and starts autoplay at `now`.
    ///
    /// With no slides the slider is inert and autoplay never starts.
    #[must_use]
    pub fn new(len: usize, now: u64) -> Self {
        let mut autoplay = Interval::new(HERO_AUTOPLAY_MS);
        if len > 0 {
            autoplay.start(now);
        } else {
            tracing::debug!("hero slider has no slides; autoplay disabled");
        }
        Self {
            len,
            current: 0,
            autoplay,
            swipe: SwipeState::new(),
        }
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visible slide, if any.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.current)
        }
    }

    /// Returns `true` if slide (and dot) `index` carries the active state.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.current
    }

    /// Returns `true` while autoplay is running.
    #[must_use]
    pub const fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Shows slide `index`. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring unknown hero slide");
            return false;
        }
        let changed = index != self.current;
        self.current = index;
        changed
    }

    /// Shows the following slide, wrapping to the first.
    pub fn next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.show((self.current + 1) % self.len)
    }

    /// Shows the preceding slide, wrapping to the last.
    pub fn previous(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.show((self.current + self.len - 1) % self.len)
    }

    /// Dot click: shows `index` and restarts the autoplay period.
    pub fn select_dot(&mut self, index: usize, now: u64) -> bool {
        self.autoplay.stop();
        let changed = self.show(index);
        self.resume(now);
        changed
    }

    /// Advances when autoplay is due.
    pub fn tick(&mut self, now: u64) -> bool {
        self.autoplay.poll(now) && self.next()
    }

    /// Pointer entered the slider; autoplay pauses.
    pub fn on_pointer_enter(&mut self) {
        self.autoplay.stop();
    }

    /// Pointer left the slider; any drag is dropped and autoplay resumes.
    pub fn on_pointer_leave(&mut self, now: u64) {
        self.swipe.cancel();
        self.resume(now);
    }

    /// Pointer pressed; autoplay pauses for the duration of the drag.
    pub fn on_pointer_down(&mut self, position: Point) {
        if self.len == 0 {
            return;
        }
        self.autoplay.stop();
        self.swipe.on_down(position);
    }

    /// Pointer moved. Returns `true` if the host should suppress default behavior.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        self.swipe.on_move(position)
    }

    /// Pointer released; swipes one slide if the drag travelled far enough.
    pub fn on_pointer_up(&mut self, position: Point, now: u64) -> bool {
        if !self.swipe.is_dragging() {
            return false;
        }
        let changed = match self.swipe.on_up(position) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Previous) => self.previous(),
            None => false,
        };
        self.resume(now);
        changed
    }

    fn resume(&mut self, now: u64) {
        if self.len > 0 {
            self.autoplay.restart(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_both_ways() {
        let mut hero = HeroSlider::new(3, 0);
        assert!(hero.next());
        assert!(hero.next());
        assert_eq!(hero.current(), Some(2));
        assert!(hero.next());
        assert_eq!(hero.current(), Some(0));
        assert!(hero.previous());
        assert_eq!(hero.current(), Some(2));
    }

    #[test]
    fn single_slide_never_changes() {
        let mut hero = HeroSlider::new(1, 0);
        assert!(!hero.next());
        assert!(!hero.previous());
        assert!(!hero.tick(5000));
        assert_eq!(hero.current(), Some(0));
    }

    #[test]
    fn show_ignores_out_of_range() {
        let mut hero = HeroSlider::new(3, 0);
        assert!(!hero.show(3));
        assert_eq!(hero.current(), Some(0));
        assert!(hero.show(1));
        assert!(hero.is_active(1));
        assert!(!hero.is_active(0));
    }

    #[test]
    fn autoplay_advances_every_period() {
        let mut hero = HeroSlider::new(3, 1000);
        assert!(!hero.tick(5999));
        assert!(hero.tick(6000));
        assert_eq!(hero.current(), Some(1));
        assert!(hero.tick(11_000));
        assert_eq!(hero.current(), Some(2));
    }

    #[test]
    fn hover_pauses_and_leave_restarts() {
        let mut hero = HeroSlider::new(3, 0);
        hero.on_pointer_enter();
        assert!(!hero.is_autoplaying());
        assert!(!hero.tick(20_000));

        hero.on_pointer_leave(20_000);
        assert!(hero.is_autoplaying());
        assert!(!hero.tick(24_999));
        assert!(hero.tick(25_000));
    }

    #[test]
    fn dot_selection_restarts_period() {
        let mut hero = HeroSlider::new(4, 0);
        assert!(hero.select_dot(3, 4000));
        assert_eq!(hero.current(), Some(3));
        assert!(!hero.tick(5000));
        assert!(hero.tick(9000));
        assert_eq!(hero.current(), Some(0));

        assert!(!hero.select_dot(9, 9500));
        assert!(hero.is_autoplaying());
    }

    #[test]
    fn swipes_navigate_and_resume_autoplay() {
        let mut hero = HeroSlider::new(3, 0);
        hero.on_pointer_down(Point::new(400.0, 0.0));
        assert!(!hero.is_autoplaying());
        assert!(hero.on_pointer_move(Point::new(390.0, 0.0)));
        assert!(hero.on_pointer_up(Point::new(100.0, 0.0), 1000));
        assert_eq!(hero.current(), Some(1));
        assert!(hero.is_autoplaying());

        hero.on_pointer_down(Point::new(100.0, 0.0));
        assert!(hero.on_pointer_up(Point::new(300.0, 0.0), 2000));
        assert_eq!(hero.current(), Some(0));

        hero.on_pointer_down(Point::new(100.0, 0.0));
        assert!(!hero.on_pointer_up(Point::new(120.0, 0.0), 3000));
        assert_eq!(hero.current(), Some(0));
    }

    #[test]
    fn leaving_mid_drag_drops_the_drag() {
        let mut hero = HeroSlider::new(3, 0);
        hero.on_pointer_down(Point::new(400.0, 0.0));
        hero.on_pointer_leave(100);
        assert!(!hero.on_pointer_up(Point::new(0.0, 0.0), 200));
        assert_eq!(hero.current(), Some(0));
    }

    #[test]
    fn empty_slider_is_inert() {
        let mut hero = HeroSlider::new(0, 0);
        assert_eq!(hero.current(), None);
        assert!(!hero.is_autoplaying());
        assert!(!hero.next());
        assert!(!hero.previous());
        assert!(!hero.select_dot(0, 10));
        hero.on_pointer_leave(10);
        assert!(!hero.is_autoplaying());
        assert!(!hero.tick(100_000));
    }
}
