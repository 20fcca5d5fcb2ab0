//! # Run Command
//!
//! Runs an external command, optionally retrying it, and prints its output
//! lines (raw, or parsed with a capture regex).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    process::{self, Invocation, RetryPolicy},
    text::LineParser,
};

/// Arguments for the run command
pub struct RunArgs {
    /// Program and arguments
    pub command: Vec<String>,
    /// Whole command line as one shell-style string (alternative to `command`)
    pub line: Option<String>,
    pub cwd: Option<PathBuf>,
    /// Retry a failing command; `Some(None)` uses the configured attempt count
    pub retry: Option<Option<u32>>,
    pub delay_ms: Option<u64>,
    /// Parse stdout lines with this capture regex
    pub parse: Option<String>,
    pub names: Vec<String>,
    pub enforce: bool,
}

/// Executes the run command and returns the child's exit code.
pub fn execute(args: &RunArgs) -> Result<i32> {
    let config = Config::load()?;

    let invocation = match (&args.line, args.command.split_first()) {
        (Some(line), _) => Invocation::from_command_line(line)?,
        (None, Some((program, rest))) => Invocation::new(program.as_str()).args(rest.iter().cloned()),
        (None, None) => anyhow::bail!("No command given"),
    }
    .cwd(args.cwd.clone());

    let policy = retry_policy(args, &config);
    let retried = process::capture_with_retry(&invocation, policy)?;
    let captured = retried.value;

    for line in &captured.stderr {
        eprintln!("{line}");
    }

    match args.parse {
        Some(ref line_pattern) => {
            let parser = LineParser::new(line_pattern, args.names.clone())?;
            let values = parser.parse_all(&captured.stdout, args.enforce)?;
            super::print_values(values)?;
        }
        None => {
            for line in &captured.stdout {
                println!("{line}");
            }
        }
    }

    let code = captured.exit_code.unwrap_or(1);
    if code != 0 {
        let attempts = retried.attempts;
        let message = format!("{invocation} exited with code {code} after {attempts} attempt(s)");
        if config.color_stderr() {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{message}");
        }
    }
    Ok(code)
}

fn retry_policy(args: &RunArgs, config: &Config) -> RetryPolicy {
    let configured = config.retry_policy();
    let Some(requested) = args.retry else {
        return RetryPolicy {
            attempts: 1,
            ..configured
        };
    };

    RetryPolicy {
        attempts: requested.unwrap_or(configured.attempts),
        delay: args
            .delay_ms
            .map_or(configured.delay, Duration::from_millis),
    }
}
