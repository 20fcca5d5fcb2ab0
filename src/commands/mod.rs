//! # Commands
//!
//! CLI command implementations for shellkit.
//!
//! Record commands read a batch from `--input` or stdin, write records to
//! stdout as JSON Lines, and print guidance to stderr when a field pattern
//! needs narrowing.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod fields;
pub mod filter;
pub mod git;
pub mod ini;
pub mod paint;
pub mod parse;
pub mod render;
pub mod run;
pub mod select;
pub mod seq;
pub mod setup;
pub mod unique;

use std::{io, path::Path};

use anyhow::{Context, Result};

pub use self::{
    completions::execute as completions,
    fields::{execute as fields, FieldsArgs},
    filter::{execute as filter, FilterArgs},
    git::{execute as git, GitArgs},
    ini::{execute as ini, IniArgs},
    paint::{execute as paint, PaintArgs},
    parse::{execute as parse, ParseArgs},
    render::{execute as render, RenderArgs},
    run::{execute as run, RunArgs},
    select::{execute as select, SelectArgs},
    seq::{all, any, first, last, median, MedianArgs, PredicateArgs, TakeArgs},
    setup::execute as setup,
    unique::{execute as unique, UniqueArgs},
};
use crate::{
    config::Config,
    io as record_io,
    record::{self, Outcome, Record, Resolution, Value},
    ui,
};

// =============================================================================
// Shared Input/Output
// =============================================================================

fn describe(input: Option<&Path>) -> String {
    input.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}

/// Reads the record batch for a command.
pub(crate) fn load_records(input: Option<&Path>) -> Result<Vec<Record>> {
    record_io::read_records(input)
        .with_context(|| format!("Failed to read records from {}", describe(input)))
}

/// Reads the text lines for a command.
pub(crate) fn load_lines(input: Option<&Path>) -> Result<Vec<String>> {
    record_io::read_lines(input)
        .with_context(|| format!("Failed to read lines from {}", describe(input)))
}

/// Writes records to stdout.
pub(crate) fn print_records(records: &[Record]) -> Result<()> {
    record_io::write_records(&mut io::stdout().lock(), records)
        .context("Failed to write records")
}

/// Writes bare values one per line and records as JSON Lines.
pub(crate) fn print_values(values: Vec<Value>) -> Result<()> {
    for value in values {
        match value {
            Value::Record(record) => print_records(std::slice::from_ref(&record))?,
            other => println!("{other}"),
        }
    }
    Ok(())
}

/// Resolves a field pattern, printing guidance and failing when it does not
/// name exactly one field.
pub(crate) fn resolve_or_report(records: &[Record], field_pattern: &str) -> Result<String> {
    match record::resolve(records, field_pattern)? {
        Resolution::Resolved(field) => Ok(field),
        unresolved => {
            let config = Config::load()?;
            let reports: Vec<_> = unresolved.into_report().into_iter().collect();
            ui::print_reports(&reports, config.color_stderr());
            anyhow::bail!("Field pattern '{field_pattern}' does not name a single field")
        }
    }
}

/// Prints an outcome: records to stdout, reports to stderr.
pub(crate) fn emit(outcome: &Outcome, config: &Config) -> Result<()> {
    match outcome {
        Outcome::Records(records) => print_records(records),
        Outcome::Reported(reports) => {
            ui::print_reports(reports, config.color_stderr());
            Ok(())
        }
    }
}
