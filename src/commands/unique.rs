//! # Unique Command
//!
//! Drops repeated records (optionally keyed by a field) or repeated lines,
//! keeping first occurrences in order.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::record::{self, Record, Value};

/// Arguments for the unique command
pub struct UniqueArgs {
    /// Field pattern to key records by
    pub by: Option<String>,
    /// Treat input as plain lines instead of records
    pub lines: bool,
    pub input: Option<PathBuf>,
}

/// Executes the unique command.
pub fn execute(args: &UniqueArgs) -> Result<()> {
    if args.lines {
        for line in record::unique(super::load_lines(args.input.as_deref())?) {
            println!("{line}");
        }
        return Ok(());
    }

    let records = super::load_records(args.input.as_deref())?;

    let kept = match args.by {
        None => {
            let keyed = records
                .into_iter()
                .map(|r| serde_json::to_string(&r).map(|key| (key, r)))
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to compare records")?;
            record::unique_by(keyed, |(key, _)| key.clone())
                .into_iter()
                .map(|(_, r)| r)
                .collect()
        }
        Some(ref by) => {
            let field = super::resolve_or_report(&records, by)?;
            record::unique_by(records, |r: &Record| r.get(&field).map(Value::to_string))
        }
    };

    super::print_records(&kept)
}
