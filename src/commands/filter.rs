//! # Where Command
//!
//! Filters records on one loosely-named field.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    config::Config,
    record::{self, FilterCriteria},
};

/// Arguments for the where command
pub struct FilterArgs {
    pub field: Option<String>,
    pub value: Option<String>,
    pub no_value: bool,
    pub input: Option<PathBuf>,
}

/// Executes the where command.
pub fn execute(args: &FilterArgs) -> Result<()> {
    let config = Config::load()?;
    let records = super::load_records(args.input.as_deref())?;

    let criteria = FilterCriteria {
        field: args.field.clone(),
        value: args.value.clone(),
        no_value: args.no_value,
    };

    let outcome = record::filter(&records, &criteria)?;
    super::emit(&outcome, &config)
}
