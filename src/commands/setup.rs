//! # Setup Command
//!
//! Writes the commented default config to `~/.config/shellkit/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

/// Executes the setup command.
pub fn execute() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        eprintln!("{} Created global config: {}", "✓".green(), path.display());
    } else {
        eprintln!(
            "{} Global config already exists: {}",
            "✓".green(),
            path.display()
        );
    }

    Ok(())
}
