//! # Fields Command
//!
//! Lists the field names present in a record batch.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{constants::MATCH_ALL_PATTERN, record};

/// Arguments for the fields command
pub struct FieldsArgs {
    /// Only list fields matching this pattern
    pub pattern: Option<String>,
    pub input: Option<PathBuf>,
}

/// Executes the fields command.
pub fn execute(args: &FieldsArgs) -> Result<()> {
    let records = super::load_records(args.input.as_deref())?;
    let field_pattern = args.pattern.as_deref().unwrap_or(MATCH_ALL_PATTERN);

    for name in record::fields(&records, field_pattern)? {
        println!("{name}");
    }

    Ok(())
}
