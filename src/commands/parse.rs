//! # Parse Command
//!
//! Turns text lines into values or labeled records with a capture regex.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::text::LineParser;

/// Arguments for the parse command
pub struct ParseArgs {
    pub pattern: String,
    /// Labels for capture groups 1..n; bare group 1 when empty
    pub names: Vec<String>,
    /// Fail on the first non-matching line instead of skipping it
    pub enforce: bool,
    pub input: Option<PathBuf>,
}

/// Executes the parse command.
pub fn execute(args: &ParseArgs) -> Result<()> {
    let parser = LineParser::new(&args.pattern, args.names.clone())?;
    let lines = super::load_lines(args.input.as_deref())?;

    let values = parser.parse_all(&lines, args.enforce)?;
    super::print_values(values)
}
