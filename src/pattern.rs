//! # Pattern Compilation
//!
//! Compiles user-supplied regular expressions. Field and value patterns are
//! matched as case-insensitive searches; line patterns are matched as authored.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Compiles a pattern for case-insensitive substring search.
pub fn case_insensitive(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| invalid(pattern, source))
}

/// Compiles a pattern exactly as authored (case-sensitive).
pub fn as_authored(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| invalid(pattern, source))
}

fn invalid(pattern: &str, source: regex::Error) -> Error {
    Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    }
}
