// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspection and rewriting of a page URL.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use regex::RegexSet;
use url::Url;

use crate::CleanOptions;

bitflags::bitflags! {
    /// Reasons a URL needs cleaning.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Findings: u8 {
        /// A stripped query parameter is present.
        const UNSAFE_PARAM  = 0b001;
        /// The path ends with the stripped suffix.
        const STREAM_SUFFIX = 0b010;
        /// The decoded URL matches a token pattern.
        const TOKEN_PATTERN = 0b100;
    }
}

/// Why a URL could not be inspected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CleanError {
    /// The input is not an absolute URL.
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),
    /// A `%` is not followed by two hex digits.
    #[error("malformed percent escape at byte {0}")]
    MalformedEscape(usize),
    /// Percent-decoding produced bytes that are not UTF-8.
    #[error("decoded URL is not UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
    /// A token pattern failed to compile.
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// The URL has no origin a redirect could target (`data:`, `file:`, ...).
    #[error("URL has an opaque origin")]
    OpaqueOrigin,
}

/// Outcome of [`clean`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing unsafe was found; leave the page alone.
    Keep,
    /// Replace the current navigation entry with this URL.
    Redirect(Url),
}

impl Verdict {
    /// The redirect target, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<&Url> {
        match self {
            Self::Keep => None,
            Self::Redirect(url) => Some(url),
        }
    }
}

/// Decodes every percent escape in `href`, failing where a browser would.
///
/// ```
/// use understory_url_clean::decode_href;
///
/// assert_eq!(decode_href("/a%20b").unwrap(), "/a b");
/// assert!(decode_href("/100%").is_err());
/// ```
///
/// # Errors
///
/// Returns [`CleanError::MalformedEscape`] for a dangling or non-hex escape
/// and [`CleanError::Decode`] when the decoded bytes are not UTF-8.
pub fn decode_href(href: &str) -> Result<Cow<'_, str>, CleanError> {
    let bytes = href.as_bytes();
    for (at, _) in href.match_indices('%') {
        let escape = bytes.get(at + 1..at + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(CleanError::MalformedEscape(at));
        }
    }
    percent_decode_str(href)
        .decode_utf8()
        .map_err(CleanError::from)
}

/// Reports what is unsafe about `url` without rewriting it.
///
/// # Errors
///
/// See [`CleanError`]; an empty result is `Ok(Findings::empty())`.
pub fn inspect(url: &Url, options: &CleanOptions) -> Result<Findings, CleanError> {
    let mut findings = Findings::empty();

    if url
        .query_pairs()
        .any(|(name, _)| options.strip_params.iter().any(|p| *p == name))
    {
        findings |= Findings::UNSAFE_PARAM;
    }

    if let Some(suffix) = options.strip_suffix.as_deref()
        && !suffix.is_empty()
        && url.path().ends_with(suffix)
    {
        findings |= Findings::STREAM_SUFFIX;
    }

    let patterns = RegexSet::new(&options.token_patterns)?;
    let decoded = decode_href(url.as_str())?;
    if patterns.is_match(&decoded) {
        findings |= Findings::TOKEN_PATTERN;
    }

    Ok(findings)
}

/// Decides whether `url` must be replaced and with what.
///
/// The replacement keeps only the origin and the path, with the stripped
/// suffix removed once: query, fragment, and credentials are all dropped.
///
/// ```
/// use understory_url_clean::{CleanOptions, Verdict, clean};
/// use url::Url;
///
/// let options = CleanOptions::default();
/// let url = Url::parse("https://example.com/live/zstream?liveClassId=42#chat").unwrap();
/// let Verdict::Redirect(to) = clean(&url, &options).unwrap() else {
///     panic!("expected a redirect");
/// };
/// assert_eq!(to.as_str(), "https://example.com/live");
///
/// let url = Url::parse("https://example.com/courses?page=2").unwrap();
/// assert_eq!(clean(&url, &options).unwrap(), Verdict::Keep);
/// ```
///
/// # Errors
///
/// See [`CleanError`].
pub fn clean(url: &Url, options: &CleanOptions) -> Result<Verdict, CleanError> {
    let findings = inspect(url, options)?;
    if findings.is_empty() {
        return Ok(Verdict::Keep);
    }

    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(CleanError::OpaqueOrigin);
    }

    let mut path = url.path();
    if findings.contains(Findings::STREAM_SUFFIX)
        && let Some(suffix) = options.strip_suffix.as_deref()
    {
        path = path.strip_suffix(suffix).unwrap_or(path);
    }

    let mut target = Url::parse(&origin.ascii_serialization())?;
    target.set_path(path);
    tracing::debug!(?findings, from = %url, to = %target, "URL needs cleaning");
    Ok(Verdict::Redirect(target))
}

/// Parses and cleans the current location, returning where to go instead.
///
/// Failures are logged and treated as "leave the page alone", so callers can
/// run this unconditionally before any other initialization.
#[must_use]
pub fn clean_href(href: &str, options: &CleanOptions) -> Option<Url> {
    let result = Url::parse(href)
        .map_err(CleanError::from)
        .and_then(|url| clean(&url, options));
    match result {
        Ok(Verdict::Keep) => None,
        Ok(Verdict::Redirect(to)) => {
            tracing::info!(to = %to, "replacing location with cleaned URL");
            Some(to)
        }
        Err(err) => {
            tracing::warn!(%err, "error cleaning link");
            None
        }
    }
}
