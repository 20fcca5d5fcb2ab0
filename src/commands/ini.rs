//! # INI Command
//!
//! Parses an INI file and prints the document as JSON.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{config::Config, text::ini, ui};

/// Arguments for the ini command
pub struct IniArgs {
    /// INI file; stdin when absent
    pub file: Option<PathBuf>,
    /// Comment marker override
    pub comment: Option<String>,
    /// Keep sections without keys
    pub keep_empty: bool,
}

/// Executes the ini command.
pub fn execute(args: &IniArgs) -> Result<()> {
    let config = Config::load()?;

    let mut options = config.ini_options();
    if let Some(ref marker) = args.comment {
        options.comment_marker.clone_from(marker);
    }
    options.keep_empty_sections |= args.keep_empty;

    let lines = super::load_lines(args.file.as_deref())?;
    let parsed = ini::parse(&lines, &options)?;

    ui::print_warnings(&parsed.warnings, config.color_stderr());

    let json =
        serde_json::to_string_pretty(&parsed.document).context("Failed to serialize document")?;
    println!("{json}");
    Ok(())
}
