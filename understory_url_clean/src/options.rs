// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What counts as unsafe in a page URL.

/// Query parameters that leak session state.
pub const DEFAULT_STRIP_PARAMS: [&str; 3] = ["param1", "liveClassId", "mode"];

/// Path suffix appended by the streaming flow.
pub const DEFAULT_STRIP_SUFFIX: &str = "/zstream";

/// Patterns that indicate a credential somewhere in the URL.
///
/// The first matches the base64url header of a JSON Web Token, the second any
/// mention of a token.
pub const DEFAULT_TOKEN_PATTERNS: [&str; 2] = [r"eyJ[a-zA-Z0-9_-]{10,}", r"(?i)token"];

/// Rules applied by [`clean`](crate::clean).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanOptions {
    /// Query parameter names whose presence forces a redirect.
    pub strip_params: Vec<String>,
    /// Trailing path segment removed from the path, if present.
    pub strip_suffix: Option<String>,
    /// Regular expressions matched against the percent-decoded URL.
    pub token_patterns: Vec<String>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            strip_params: DEFAULT_STRIP_PARAMS.map(String::from).to_vec(),
            strip_suffix: Some(DEFAULT_STRIP_SUFFIX.to_owned()),
            token_patterns: DEFAULT_TOKEN_PATTERNS.map(String::from).to_vec(),
        }
    }
}
