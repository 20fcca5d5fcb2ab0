//! # Projection
//!
//! Restricts every record of a batch to the fields named by loose patterns.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use log::debug;

use super::{fields, resolve, Outcome, Record, Report, Resolution};
use crate::{constants::MATCH_ALL_PATTERN, error::Result};

/// Projects `records` onto the fields matched by `patterns`.
///
/// Patterns are resolved against the whole batch, so the caller must hand in
/// fully buffered input. Output fields follow `patterns` order and records keep
/// their input order. Projection is all-or-nothing: when any pattern is missing
/// or ambiguous no records are produced, only reports.
///
/// With no patterns at all, the available fields are reported instead.
pub fn project<S: AsRef<str>>(records: &[Record], patterns: &[S]) -> Result<Outcome> {
    if patterns.is_empty() {
        let available = fields(records, MATCH_ALL_PATTERN)?;
        return Ok(Outcome::Reported(vec![Report::AvailableFields(available)]));
    }

    let mut resolved = Vec::with_capacity(patterns.len());
    let mut reports = Vec::new();

    for field_pattern in patterns {
        match resolve(records, field_pattern.as_ref())? {
            Resolution::Resolved(name) => resolved.push(name),
            unresolved => reports.extend(unresolved.into_report()),
        }
    }

    if !reports.is_empty() {
        debug!("projection withheld: {} pattern(s) unresolved", reports.len());
        return Ok(Outcome::Reported(reports));
    }

    Ok(Outcome::Records(
        records.iter().map(|record| record.project(&resolved)).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    fn listing() -> Vec<Record> {
        vec![
            Record::new().with("Name", "a.txt").with("Length", 10),
            Record::new().with("Name", "b.txt").with("Length", 20),
        ]
    }

    #[test]
    fn test_project_in_pattern_order() {
        let records = project(&listing(), &["len", "name"])
            .unwrap()
            .into_records();

        assert_eq!(records.len(), 2);
        let names: Vec<_> = records[0].names().collect();
        assert_eq!(names, ["Length", "Name"]);
        assert_eq!(records[1].get("Name"), Some(&Value::from("b.txt")));
    }

    #[test]
    fn test_project_all_or_nothing() {
        let outcome = project(&listing(), &["name", "qqq"]).unwrap();
        assert_eq!(
            outcome.reports(),
            [Report::NotFound {
                pattern: "qqq".into()
            }]
        );
        assert!(outcome.into_records().is_empty());
    }

    #[test]
    fn test_project_reports_every_failure() {
        let records = vec![Record::new().with("CreationTime", 1).with("LastWriteTime", 2)];
        let outcome = project(&records, &["time", "zzz"]).unwrap();
        assert_eq!(outcome.reports().len(), 2);
    }

    #[test]
    fn test_project_without_patterns_lists_fields() {
        let outcome = project::<&str>(&listing(), &[]).unwrap();
        assert_eq!(
            outcome,
            Outcome::Reported(vec![Report::AvailableFields(vec![
                "Name".into(),
                "Length".into()
            ])])
        );
    }

    #[test]
    fn test_project_fills_missing_fields_with_null() {
        let records = vec![
            Record::new().with("Name", "a").with("Extra", true),
            Record::new().with("Name", "b"),
        ];
        let projected = project(&records, &["extra"]).unwrap().into_records();
        assert_eq!(projected[1].get("Extra"), Some(&Value::Null));
    }
}
