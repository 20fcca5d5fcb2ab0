//! # Git Command
//!
//! Passes arguments straight through to `git`, attached to the terminal.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::process::{self, Invocation};

/// Arguments for the git command
pub struct GitArgs {
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Runs git and returns its exit code.
pub fn execute(args: &GitArgs) -> Result<i32> {
    let invocation = Invocation::new("git")
        .args(args.args.iter().cloned())
        .cwd(args.cwd.clone());

    // Terminated by a signal
    Ok(process::passthrough(&invocation)?.unwrap_or(1))
}
