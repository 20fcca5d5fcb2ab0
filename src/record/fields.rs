//! # Field Discovery and Resolution
//!
//! Enumerates the field names of a record batch and resolves a loose,
//! user-typed pattern to exactly one of them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use log::{debug, trace};

use super::{unique_by, Record, Report};
use crate::{error::Result, pattern};

// =============================================================================
// Field Catalog
// =============================================================================

/// Lists the field names across `records` that match `pattern`.
///
/// Each record's fields are considered independently, so heterogeneous batches
/// are fine. Names are deduplicated case-insensitively and returned in order of
/// first appearance. This is also the exploration mode of [`resolve`]: it
/// returns every candidate instead of insisting on one.
pub fn fields(records: &[Record], field_pattern: &str) -> Result<Vec<String>> {
    let re = pattern::case_insensitive(field_pattern)?;
    let names = records
        .iter()
        .flat_map(Record::names)
        .filter(|name| re.is_match(name))
        .map(str::to_string);

    Ok(unique_by(names, |name| name.to_lowercase()))
}

// =============================================================================
// Ambiguity Resolution
// =============================================================================

/// Outcome of resolving a pattern to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    NotFound {
        pattern: String,
    },
    Ambiguous {
        pattern: String,
        candidates: Vec<String>,
    },
}

impl Resolution {
    /// The resolved field name, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Resolved(name) => Some(name),
            _ => None,
        }
    }

    /// Converts an unresolved outcome into the report shown to the user.
    pub fn into_report(self) -> Option<Report> {
        match self {
            Self::Resolved(_) => None,
            Self::NotFound { pattern } => Some(Report::NotFound { pattern }),
            Self::Ambiguous {
                pattern,
                candidates,
            } => Some(Report::Ambiguous {
                pattern,
                candidates,
            }),
        }
    }
}

/// Resolves `field_pattern` to exactly one field name of `records`.
///
/// A single candidate resolves directly. With several candidates, a candidate
/// whose name equals the pattern (ignoring case) wins; otherwise the result is
/// [`Resolution::Ambiguous`] carrying every candidate.
pub fn resolve(records: &[Record], field_pattern: &str) -> Result<Resolution> {
    let mut candidates = fields(records, field_pattern)?;
    trace!("pattern '{field_pattern}' matched {candidates:?}");

    let resolution = match candidates.len() {
        0 => Resolution::NotFound {
            pattern: field_pattern.to_string(),
        },
        1 => Resolution::Resolved(candidates.remove(0)),
        _ => {
            let folded = field_pattern.to_lowercase();
            let mut exact = candidates
                .iter()
                .filter(|name| name.to_lowercase() == folded);

            match (exact.next(), exact.next()) {
                (Some(name), None) => Resolution::Resolved(name.clone()),
                _ => Resolution::Ambiguous {
                    pattern: field_pattern.to_string(),
                    candidates,
                },
            }
        }
    };

    debug!("resolved '{field_pattern}' to {resolution:?}");
    Ok(resolution)
}
