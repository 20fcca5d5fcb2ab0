//! # Records
//!
//! Loosely-typed records and the toolkit for exploring batches of them:
//! field discovery, ambiguity-tolerant field resolution, projection,
//! filtering and small sequence helpers.
//!
//! A [`Record`] is an ordered mapping from field name to [`Value`]. Records in
//! one batch need not share a field set. Field names are matched
//! case-insensitively but always written back verbatim.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod fields;
pub mod filter;
pub mod select;
pub mod seq;
pub mod unique;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use self::{
    fields::{fields, resolve, Resolution},
    filter::{filter, FilterCriteria},
    select::project,
    unique::{unique, unique_by},
};

// =============================================================================
// Values
// =============================================================================

/// A single field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    /// Returns false for null, `false`, zero, the empty string and the empty list.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Record(_) => true,
        }
    }

    /// Numeric view of the value. Text is parsed after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Record(record) => {
                let json = serde_json::to_string(record).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

// =============================================================================
// Records
// =============================================================================

/// Ordered field-name to value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for constructing records in code.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, keeping its original position if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Looks up a field by name, exact spelling first, then case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).or_else(|| {
            let folded = name.to_lowercase();
            self.fields
                .iter()
                .find(|(key, _)| key.to_lowercase() == folded)
                .map(|(_, value)| value)
        })
    }

    /// Field names in record order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a record restricted to `names`, in that order.
    ///
    /// Fields this record lacks are emitted as null.
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let mut projected = Self::new();
        for name in names {
            let name = name.as_ref();
            let value = self.get(name).cloned().unwrap_or(Value::Null);
            projected.insert(name, value);
        }
        projected
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

// =============================================================================
// Outcomes and Reports
// =============================================================================

/// Guidance produced instead of records when a request cannot be answered
/// unambiguously. These are expected states of interactive exploration.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// No field was requested; these are the fields that exist.
    AvailableFields(Vec<String>),
    /// No field matched the pattern.
    NotFound { pattern: String },
    /// Several fields matched and none equals the pattern exactly.
    Ambiguous {
        pattern: String,
        candidates: Vec<String>,
    },
    /// No value pattern was given; these are the values the field takes.
    DistinctValues { field: String, values: Vec<Value> },
}

/// Result of a projection or filter: either records, or reports explaining
/// why no records were produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Records(Vec<Record>),
    Reported(Vec<Report>),
}

impl Outcome {
    /// Records produced, empty when the outcome is a report.
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Records(records) => records,
            Self::Reported(_) => Vec::new(),
        }
    }

    pub fn reports(&self) -> &[Report] {
        match self {
            Self::Records(_) => &[],
            Self::Reported(reports) => reports,
        }
    }
}
