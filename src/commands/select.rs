//! # Select Command
//!
//! Projects records onto loosely-named fields.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{config::Config, record};

/// Arguments for the select command
pub struct SelectArgs {
    pub patterns: Vec<String>,
    pub input: Option<PathBuf>,
}

/// Executes the select command.
pub fn execute(args: &SelectArgs) -> Result<()> {
    let config = Config::load()?;
    let records = super::load_records(args.input.as_deref())?;

    let outcome = record::project(&records, &args.patterns)?;
    super::emit(&outcome, &config)
}
