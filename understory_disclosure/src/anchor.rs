// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-page anchor links.

/// Element id an in-page link points at, if any.
///
/// Only `#id` hrefs qualify. A bare `#`, an empty href, and links to other
/// documents return `None`, and the browser's default handling applies.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Resolves a click on a link with `href`.
///
/// Returns the id to scroll into view (aligned to the top of the viewport)
/// when `href` names an element that `exists`. In that case the host must
/// suppress the link's default navigation. Otherwise the click is left
/// alone, so a dangling `#missing` still updates the location hash.
///
/// ```
/// use understory_disclosure::on_anchor_click;
///
/// let exists = |id: &str| matches!(id, "courses" | "faq");
/// assert_eq!(on_anchor_click("#faq", exists), Some("faq"));
/// assert_eq!(on_anchor_click("#pricing", exists), None);
/// assert_eq!(on_anchor_click("#", exists), None);
/// ```
pub fn on_anchor_click<'a>(href: &'a str, exists: impl FnOnce(&str) -> bool) -> Option<&'a str> {
    let id = anchor_target(href)?;
    if exists(id) {
        Some(id)
    } else {
        tracing::debug!(href, "anchor target not found");
        None
    }
}
