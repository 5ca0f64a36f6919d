// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Several independent carousels driven by shared window events.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Carousel, Changes, KeyInput, Measurements};

/// Per-member changes from one broadcast; members with no changes are omitted.
pub type GroupChanges<K> = SmallVec<[(K, Changes); 4]>;

/// Keyed carousels that share window-level input.
///
/// Keydown and resize arrive once per page but concern every carousel on it.
/// A group forwards each such event to all members, in insertion order, and
/// reports which members changed. Members never share state.
///
/// ```
/// use understory_carousel::{
///     Carousel, CarouselConfig, CarouselGroup, Key, KeyInput, Measurements,
/// };
///
/// let m = Measurements { viewport_width: 1280.0, container_width: 1200.0, card_width: 282.0 };
/// let mut group = CarouselGroup::new();
/// group.insert("faculty", Carousel::new(8, CarouselConfig::faculty(), m));
/// group.insert("videos", Carousel::new(3, CarouselConfig::videos(), m));
///
/// let changed = group.on_key(KeyInput::new(Key::ArrowRight));
/// // Only the faculty strip has anywhere to go.
/// assert_eq!(changed.len(), 1);
/// assert_eq!(changed[0].0, "faculty");
/// assert_eq!(group.get(&"faculty").unwrap().index(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CarouselGroup<K> {
    members: Vec<(K, Carousel)>,
}

impl<K> Default for CarouselGroup<K> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<K: Clone + PartialEq> CarouselGroup<K> {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member, replacing and returning any carousel already under `key`.
    pub fn insert(&mut self, key: K, carousel: Carousel) -> Option<Carousel> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(core::mem::replace(slot, carousel));
        }
        self.members.push((key, carousel));
        None
    }

    /// Removes and returns the member under `key`.
    pub fn remove(&mut self, key: &K) -> Option<Carousel> {
        let position = self.members.iter().position(|(k, _)| k == key)?;
        Some(self.members.remove(position).1)
    }

    /// Member under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Carousel> {
        self.members
            .iter()
            .find_map(|(k, carousel)| (k == key).then_some(carousel))
    }

    /// Mutable member under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut Carousel> {
        self.members
            .iter_mut()
            .find_map(|(k, carousel)| (k == key).then_some(carousel))
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Carousel)> {
        self.members.iter().map(|(k, carousel)| (k, carousel))
    }

    /// Forwards a window keydown to every member.
    pub fn on_key(&mut self, input: KeyInput) -> GroupChanges<K> {
        self.broadcast(|carousel| carousel.on_key(input))
    }

    /// Forwards a window resize to every member.
    pub fn on_resize(&mut self, now: u64) {
        for (_, carousel) in &mut self.members {
            carousel.on_resize(now);
        }
    }

    /// Polls every member's resize debounce.
    ///
    /// `measure` is only called for members whose quiet window has elapsed.
    pub fn poll_resize(
        &mut self,
        now: u64,
        mut measure: impl FnMut(&K) -> Measurements,
    ) -> GroupChanges<K> {
        let mut out = GroupChanges::new();
        for (key, carousel) in &mut self.members {
            if !carousel.resize_due(now) {
                continue;
            }
            let changes = carousel.poll_resize(now, measure(key));
            if !changes.is_empty() {
                out.push((key.clone(), changes));
            }
        }
        out
    }

    fn broadcast(&mut self, mut f: impl FnMut(&mut Carousel) -> Changes) -> GroupChanges<K> {
        self.members
            .iter_mut()
            .filter_map(|(key, carousel)| {
                let changes = f(carousel);
                (!changes.is_empty()).then(|| (key.clone(), changes))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CarouselConfig, Key};

    const DESKTOP: Measurements = Measurements {
        viewport_width: 1280.0,
        container_width: 1200.0,
        card_width: 282.0,
    };

    const PHONE: Measurements = Measurements {
        viewport_width: 375.0,
        container_width: 343.0,
        card_width: 300.0,
    };

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Strip {
        Faculty,
        Testimonials,
        Videos,
    }

    fn page() -> CarouselGroup<Strip> {
        let mut group = CarouselGroup::new();
        group.insert(
            Strip::Faculty,
            Carousel::new(8, CarouselConfig::faculty(), DESKTOP),
        );
        group.insert(
            Strip::Testimonials,
            Carousel::new(6, CarouselConfig::testimonials(), DESKTOP),
        );
        group.insert(
            Strip::Videos,
            Carousel::new(5, CarouselConfig::videos(), DESKTOP),
        );
        group
    }

    #[test]
    fn keys_reach_every_member_independently() {
        let mut group = page();
        group.get_mut(&Strip::Testimonials).unwrap().go_to(2);

        let changed = group.on_key(KeyInput::new(Key::ArrowRight));
        let keys: Vec<_> = changed.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, [Strip::Faculty, Strip::Videos]);
        assert_eq!(group.get(&Strip::Faculty).unwrap().index(), 1);
        assert_eq!(group.get(&Strip::Testimonials).unwrap().index(), 2);
        assert_eq!(group.get(&Strip::Videos).unwrap().index(), 1);
    }

    #[test]
    fn hidden_sections_ignore_keys() {
        let mut group = page();
        group
            .get_mut(&Strip::Videos)
            .unwrap()
            .set_section_present(false);
        let changed = group.on_key(KeyInput::new(Key::ArrowRight));
        assert!(changed.iter().all(|(k, _)| *k != Strip::Videos));
        assert_eq!(group.get(&Strip::Videos).unwrap().index(), 0);
    }

    #[test]
    fn resize_is_debounced_for_all_members() {
        let mut group = page();
        group.on_resize(0);
        group.on_resize(100);

        let mut measured = 0;
        assert!(
            group
                .poll_resize(200, |_| {
                    measured += 1;
                    PHONE
                })
                .is_empty()
        );
        assert_eq!(measured, 0);

        let changed = group.poll_resize(350, |_| {
            measured += 1;
            PHONE
        });
        assert_eq!(measured, 3);
        assert_eq!(changed.len(), 3);
        assert!(changed.iter().all(|(_, c)| c.contains(Changes::DOTS_REBUILT)));
        assert!(group.iter().all(|(_, c)| c.per_view() == 1));
    }

    #[test]
    fn insert_replaces_and_remove_detaches() {
        let mut group = page();
        let old = group.insert(
            Strip::Videos,
            Carousel::new(2, CarouselConfig::videos(), DESKTOP),
        );
        assert_eq!(old.map(|c| c.len()), Some(5));
        assert_eq!(group.len(), 3);
        assert_eq!(group.get(&Strip::Videos).unwrap().len(), 2);

        assert!(group.remove(&Strip::Faculty).is_some());
        assert!(group.remove(&Strip::Faculty).is_none());
        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
    }
}
