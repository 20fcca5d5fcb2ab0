//! # Errors
//!
//! Typed errors raised by the record and text toolkit. Resolution states that
//! are part of normal interactive exploration (nothing matched, several fields
//! matched) are not errors; see [`crate::record::Report`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors produced by the toolkit core.
#[derive(Debug, Error)]
pub enum Error {
    /// A user-supplied regular expression failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An enforced line parse met a line that does not match.
    #[error("line does not match pattern: {line}")]
    ParseMismatch { line: String },

    /// A color name the console renderer does not know.
    #[error("unknown color '{name}'")]
    UnknownColor { name: String },

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
