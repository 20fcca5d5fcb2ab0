//! # Render Command
//!
//! Fills `{name}` placeholders in a template once per input record.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use indexmap::IndexMap;

use crate::{
    config::Config,
    record::Record,
    text::{Environment, Renderer},
};

/// Arguments for the render command
pub struct RenderArgs {
    pub template: String,
    /// `--var` values, consulted after record fields
    pub vars: Vec<(String, String)>,
    /// Render once without reading records
    pub no_input: bool,
    pub input: Option<PathBuf>,
}

/// Executes the render command.
///
/// Placeholders resolve from the record, then `--var` values, then the
/// `[variables]` table of the config, then the environment.
pub fn execute(args: &RenderArgs) -> Result<()> {
    let config = Config::load()?;

    let records = if args.no_input {
        vec![Record::new()]
    } else {
        super::load_records(args.input.as_deref())?
    };

    let vars: IndexMap<String, String> = args.vars.iter().cloned().collect();
    let renderer = Renderer::new()?
        .with_scope(&vars)
        .with_scope(config.variables())
        .with_scope(&Environment);

    for line in renderer.render_all(&records, &args.template) {
        println!("{line}");
    }

    Ok(())
}

/// Parses a `KEY=VALUE` command-line variable.
pub fn parse_var(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty variable name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
