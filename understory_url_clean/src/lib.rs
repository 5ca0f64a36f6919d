// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_url_clean --heading-base-level=0

//! Understory URL Clean: one-shot sanitation of the page location.
//!
//! Pages reached from a live-class or streaming flow can carry session
//! parameters, a `/zstream` path suffix, or an access token in their URL.
//! Before anything else initializes, the host hands its current location to
//! [`clean_href`]; if it returns a URL, the host replaces the current
//! navigation entry with it (no new history entry).
//!
//! - [`CleanOptions`]: stripped parameter names, stripped path suffix, and
//!   token patterns. `Default` holds the page's rules.
//! - [`inspect`]: reports [`Findings`] without rewriting anything.
//! - [`clean`]: returns a [`Verdict`]. A redirect target keeps only the origin
//!   and the path.
//! - [`clean_href`]: parses, cleans, and logs failures instead of returning
//!   them. Sanitation problems never block the page.
//!
//! ```
//! use understory_url_clean::{CleanOptions, clean_href};
//!
//! let options = CleanOptions::default();
//! let to = clean_href("https://acad.example/live?param1=eyJhbGciOiJIUzI1NiJ9", &options);
//! assert_eq!(to.unwrap().as_str(), "https://acad.example/live");
//!
//! assert!(clean_href("https://acad.example/courses", &options).is_none());
//! ```

mod clean;
mod options;

pub use clean::{CleanError, Findings, Verdict, clean, clean_href, decode_href, inspect};
pub use options::{
    CleanOptions, DEFAULT_STRIP_PARAMS, DEFAULT_STRIP_SUFFIX, DEFAULT_TOKEN_PATTERNS,
};
