//! # Sequence Commands
//!
//! `first`, `last`, `any`, `all` and `median` over records or lines.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    pattern,
    record::{filter::matches_value, seq, Record, Value},
};

// =============================================================================
// first / last
// =============================================================================

/// Arguments for the first and last commands
pub struct TakeArgs {
    pub count: usize,
    /// Treat input as plain lines instead of records
    pub lines: bool,
    pub input: Option<PathBuf>,
}

/// Prints the first `count` records or lines.
pub fn first(args: &TakeArgs) -> Result<()> {
    take(args, End::First)
}

/// Prints the last `count` records or lines.
pub fn last(args: &TakeArgs) -> Result<()> {
    take(args, End::Last)
}

#[derive(Debug, Clone, Copy)]
enum End {
    First,
    Last,
}

fn pick<T>(items: &[T], end: End, count: usize) -> &[T] {
    match end {
        End::First => seq::first(items, count),
        End::Last => seq::last(items, count),
    }
}

fn take(args: &TakeArgs, end: End) -> Result<()> {
    if args.lines {
        let lines = super::load_lines(args.input.as_deref())?;
        for line in pick(&lines, end, args.count) {
            println!("{line}");
        }
        return Ok(());
    }

    let records = super::load_records(args.input.as_deref())?;
    super::print_records(pick(&records, end, args.count))
}

// =============================================================================
// any / all
// =============================================================================

/// Arguments for the any and all commands
pub struct PredicateArgs {
    /// Field pattern (must resolve to exactly one field)
    pub field: String,
    /// Value pattern the field text must match
    pub value: String,
    pub input: Option<PathBuf>,
}

/// Prints whether any record's field matches; returns the answer.
pub fn any(args: &PredicateArgs) -> Result<bool> {
    evaluate(args, Quantifier::Any)
}

/// Prints whether every record's field matches; returns the answer.
pub fn all(args: &PredicateArgs) -> Result<bool> {
    evaluate(args, Quantifier::All)
}

#[derive(Debug, Clone, Copy)]
enum Quantifier {
    Any,
    All,
}

fn evaluate(args: &PredicateArgs, quantifier: Quantifier) -> Result<bool> {
    let records = super::load_records(args.input.as_deref())?;
    let field = super::resolve_or_report(&records, &args.field)?;
    let re = pattern::case_insensitive(&args.value)?;

    let check = |record: &Record| matches_value(record.get(&field), &re);
    let answer = match quantifier {
        Quantifier::Any => seq::any(&records, check),
        Quantifier::All => seq::all(&records, check),
    };

    println!("{answer}");
    Ok(answer)
}

// =============================================================================
// median
// =============================================================================

/// Arguments for the median command
pub struct MedianArgs {
    /// Numeric field pattern; without it, input lines are the numbers
    pub field: Option<String>,
    pub input: Option<PathBuf>,
}

/// Prints the median of a numeric field or of numeric input lines.
pub fn median(args: &MedianArgs) -> Result<()> {
    let values = match args.field {
        Some(ref field_pattern) => {
            let records = super::load_records(args.input.as_deref())?;
            let field = super::resolve_or_report(&records, field_pattern)?;
            records
                .iter()
                .filter_map(|record| record.get(&field).and_then(Value::as_f64))
                .collect()
        }
        None => super::load_lines(args.input.as_deref())?
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse::<f64>()
                    .with_context(|| format!("Not a number: {line}"))
            })
            .collect::<Result<Vec<_>>>()?,
    };

    let Some(median) = seq::median(&values) else {
        anyhow::bail!("No numeric values to take the median of");
    };
    println!("{median}");
    Ok(())
}
