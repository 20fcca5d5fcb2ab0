//! # Paint Command
//!
//! Prints text in a named console color.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, ui};

/// Arguments for the paint command
pub struct PaintArgs {
    pub color: String,
    pub text: Vec<String>,
    pub no_newline: bool,
}

/// Executes the paint command.
pub fn execute(args: &PaintArgs) -> Result<()> {
    let config = Config::load()?;
    let painted = ui::colorize(&args.text.join(" "), &args.color, config.color_stdout())?;

    if args.no_newline {
        print!("{painted}");
    } else {
        println!("{painted}");
    }
    Ok(())
}
