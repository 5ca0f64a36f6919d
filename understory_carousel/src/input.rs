// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by paging controls.

/// Keys a carousel responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Page back.
    ArrowLeft,
    /// Page forward.
    ArrowRight,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Kind of element holding keyboard focus when a key arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyTarget {
    /// A text-entry control; arrow keys belong to the caret there.
    TextInput,
    /// Anything else.
    Other,
}

impl KeyTarget {
    /// Classifies an element by tag name (`INPUT` and `TEXTAREA` are text entry).
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            Self::TextInput
        } else {
            Self::Other
        }
    }
}

/// A key press together with where focus was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyInput {
    /// Key pressed.
    pub key: Key,
    /// Focused element kind.
    pub target: KeyTarget,
}

impl KeyInput {
    /// A key press with focus outside any text control.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            target: KeyTarget::Other,
        }
    }

    /// Builds an input from DOM event fields.
    #[must_use]
    pub fn from_dom(key: &str, target_tag: &str) -> Self {
        Self {
            key: Key::from_name(key),
            target: KeyTarget::from_tag_name(target_tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_names_map_to_keys() {
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_name("arrowright"), Key::Other);
        assert_eq!(Key::from_name("Enter"), Key::Other);
    }

    #[test]
    fn text_controls_are_detected_by_tag() {
        assert_eq!(KeyTarget::from_tag_name("INPUT"), KeyTarget::TextInput);
        assert_eq!(KeyTarget::from_tag_name("textarea"), KeyTarget::TextInput);
        assert_eq!(KeyTarget::from_tag_name("BUTTON"), KeyTarget::Other);
        assert_eq!(
            KeyInput::from_dom("ArrowLeft", "BODY"),
            KeyInput::new(Key::ArrowLeft)
        );
    }
}
