//! # Record Filtering
//!
//! Filters a record batch on one loosely-named field, either by a value
//! pattern or by the absence of a value.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use regex::Regex;

use super::{fields, resolve, unique_by, Outcome, Record, Report, Resolution, Value};
use crate::{constants::MATCH_ALL_PATTERN, error::Result, pattern};

// =============================================================================
// Filter Criteria
// =============================================================================

/// What to filter on. Empty criteria list the available fields.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Pattern selecting the field (must resolve to exactly one).
    pub field: Option<String>,
    /// Pattern the field's text must contain (case-insensitive search).
    pub value: Option<String>,
    /// Keep records whose field is missing or falsy; `value` is ignored.
    pub no_value: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, field_pattern: impl Into<String>) -> Self {
        self.field = Some(field_pattern.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value_pattern: impl Into<String>) -> Self {
        self.value = Some(value_pattern.into());
        self
    }

    #[must_use]
    pub const fn no_value(mut self) -> Self {
        self.no_value = true;
        self
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Filters `records` according to `criteria`.
///
/// - No field pattern: reports the available fields.
/// - Field missing or ambiguous: reports it, no records.
/// - `no_value`: keeps records whose field is absent or falsy.
/// - No value pattern: reports the distinct values of the field.
/// - Otherwise: keeps records whose field text matches the value pattern.
pub fn filter(records: &[Record], criteria: &FilterCriteria) -> Result<Outcome> {
    let Some(ref field_pattern) = criteria.field else {
        let available = fields(records, MATCH_ALL_PATTERN)?;
        return Ok(Outcome::Reported(vec![Report::AvailableFields(available)]));
    };

    let field = match resolve(records, field_pattern)? {
        Resolution::Resolved(name) => name,
        unresolved => return Ok(Outcome::Reported(unresolved.into_report().into_iter().collect())),
    };

    if criteria.no_value {
        return Ok(Outcome::Records(
            records
                .iter()
                .filter(|record| is_missing(record.get(&field)))
                .cloned()
                .collect(),
        ));
    }

    let Some(ref value_pattern) = criteria.value else {
        let values = distinct_values(records, &field);
        return Ok(Outcome::Reported(vec![Report::DistinctValues { field, values }]));
    };

    let re = pattern::case_insensitive(value_pattern)?;
    Ok(Outcome::Records(
        records
            .iter()
            .filter(|record| matches_value(record.get(&field), &re))
            .cloned()
            .collect(),
    ))
}

/// Distinct values a field takes across `records`, in first-seen order.
///
/// Values are compared by their text form; records lacking the field are skipped.
pub fn distinct_values(records: &[Record], field: &str) -> Vec<Value> {
    let values = records.iter().filter_map(|record| record.get(field)).cloned();
    unique_by(values, Value::to_string)
}

// =============================================================================
// Value Predicates (public for reuse by any/all)
// =============================================================================

/// True when the value is absent or falsy.
pub fn is_missing(value: Option<&Value>) -> bool {
    !value.is_some_and(Value::is_truthy)
}

/// True when the value's text contains a match for `re`. Absent values are
/// matched as the empty string.
pub fn matches_value(value: Option<&Value>, re: &Regex) -> bool {
    let text = value.map(Value::to_string).unwrap_or_default();
    re.is_match(&text)
}
