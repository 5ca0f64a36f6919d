// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot visibility tracking for entrance animations.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;
use kurbo::Rect;

/// When an observed element counts as on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element's area that must be inside the root, in `0.0..=1.0`.
    pub threshold: f64,
    /// Added to the viewport's bottom edge; negative values shrink the root
    /// so elements reveal only once they are this far above the fold.
    pub bottom_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -50.0,
        }
    }
}

impl RevealOptions {
    /// The viewport with margins applied.
    #[must_use]
    pub fn root(&self, viewport: Rect) -> Rect {
        let y1 = (viewport.y1 + self.bottom_margin).max(viewport.y0);
        Rect::new(viewport.x0, viewport.y0, viewport.x1, y1)
    }

    /// Share of `bounds` inside `root`.
    ///
    /// A zero-area element touching the root counts as fully inside.
    #[must_use]
    pub fn intersection_ratio(root: Rect, bounds: Rect) -> f64 {
        let touches = bounds.x0 <= root.x1
            && root.x0 <= bounds.x1
            && bounds.y0 <= root.y1
            && root.y0 <= bounds.y1;
        if !touches {
            return 0.0;
        }
        let area = bounds.area();
        if area <= 0.0 {
            return 1.0;
        }
        root.intersect(bounds).area() / area
    }

    /// Returns `true` if an element at `bounds` should reveal in `viewport`.
    #[must_use]
    pub fn is_revealed(&self, viewport: Rect, bounds: Rect) -> bool {
        let root = self.root(viewport);
        let ratio = Self::intersection_ratio(root, bounds);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Tracks which keyed elements have scrolled into view.
///
/// Each element reveals at most once: after it is reported by
/// [`RevealTracker::update`] it is no longer observed, and observing it again
/// has no effect. Hosts add the `visible` class to reported elements.
///
/// ```
/// use kurbo::Rect;
/// use understory_reveal::RevealTracker;
///
/// let mut tracker = RevealTracker::default();
/// tracker.observe("offer");
/// tracker.observe("faq");
///
/// let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
/// let revealed = tracker.update(viewport, |key| match *key {
///     "offer" => Some(Rect::new(0.0, 600.0, 400.0, 900.0)),
///     _ => Some(Rect::new(0.0, 2000.0, 400.0, 2300.0)),
/// });
/// assert_eq!(revealed, ["offer"]);
/// assert!(tracker.is_revealed(&"offer"));
/// assert!(tracker.is_observed(&"faq"));
/// ```
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    options: RevealOptions,
    observed: Vec<K>,
    revealed: HashSet<K>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

impl<K> RevealTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
            revealed: HashSet::new(),
        }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Number of elements still waiting to reveal.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}

impl<K: Clone + Eq + Hash> RevealTracker<K> {
    /// Starts watching `key`. Returns `false` if it is already observed or revealed.
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains(&key) || self.observed.contains(&key) {
            return false;
        }
        self.observed.push(key);
        true
    }

    /// Stops watching `key` without revealing it.
    pub fn unobserve(&mut self, key: &K) -> bool {
        let before = self.observed.len();
        self.observed.retain(|k| k != key);
        self.observed.len() != before
    }

    /// Returns `true` while `key` is waiting to reveal.
    #[must_use]
    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.contains(key)
    }

    /// Returns `true` once `key` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    /// Checks every observed element against `viewport` and returns the ones
    /// that just became visible, in observation order.
    ///
    /// `bounds` gives each element's rectangle in the same space as
    /// `viewport`; elements it returns `None` for (not laid out, detached) are
    /// skipped and stay observed.
    pub fn update(
        &mut self,
        viewport: Rect,
        mut bounds: impl FnMut(&K) -> Option<Rect>,
    ) -> Vec<K> {
        let options = self.options;
        let mut newly = Vec::new();
        self.observed.retain(|key| {
            let Some(rect) = bounds(key) else {
                return true;
            };
            if options.is_revealed(viewport, rect) {
                newly.push(key.clone());
                false
            } else {
                true
            }
        });
        if !newly.is_empty() {
            tracing::trace!(
                count = newly.len(),
                pending = self.observed.len(),
                "revealed elements"
            );
        }
        self.revealed.extend(newly.iter().cloned());
        newly
    }
}
