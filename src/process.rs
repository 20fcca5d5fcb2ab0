//! # Process Helpers
//!
//! Launches external tools, either capturing their output as lines or
//! passing the terminal through, and retries fallible operations under an
//! explicit [`RetryPolicy`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fmt,
    path::PathBuf,
    process::{Command, Output},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::constants::{DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};

// =============================================================================
// Invocation
// =============================================================================

/// A command to launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
    /// Working directory; inherits the current one when `None`.
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    /// Builds an invocation from a shell-style command line (`git log -n 3`).
    pub fn from_command_line(line: &str) -> Result<Self> {
        let words = shlex::split(line)
            .with_context(|| format!("Cannot split command line: {line}"))?;
        let (command, args) = words
            .split_first()
            .with_context(|| format!("Empty command line: {line:?}"))?;
        Ok(Self::new(command.as_str()).args(args.iter().cloned()))
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);
        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.command.as_str()).chain(self.args.iter().map(String::as_str));
        match shlex::try_join(words) {
            Ok(line) => f.write_str(&line),
            Err(_) => write!(f, "{} {}", self.command, self.args.join(" ")),
        }
    }
}

// =============================================================================
// Running
// =============================================================================

/// Fully drained output of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// Exit code; `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl Captured {
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }

    fn from_output(output: &Output) -> Self {
        let lines = |bytes: &[u8]| {
            String::from_utf8_lossy(bytes)
                .lines()
                .map(str::to_string)
                .collect()
        };
        Self {
            exit_code: output.status.code(),
            stdout: lines(&output.stdout),
            stderr: lines(&output.stderr),
        }
    }
}

/// Runs `invocation` to completion and captures its output lines.
pub fn capture(invocation: &Invocation) -> Result<Captured> {
    debug!("capturing: {invocation}");
    let output = invocation
        .to_command()
        .output()
        .with_context(|| format!("Failed to launch: {invocation}"))?;
    Ok(Captured::from_output(&output))
}

/// Runs `invocation` attached to the current terminal and returns its exit code.
pub fn passthrough(invocation: &Invocation) -> Result<Option<i32>> {
    debug!("passthrough: {invocation}");
    let status = invocation
        .to_command()
        .status()
        .with_context(|| format!("Failed to launch: {invocation}"))?;
    Ok(status.code())
}

// =============================================================================
// Retry
// =============================================================================

/// How often and how patiently to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_RETRY_ATTEMPTS,
            delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

/// A value obtained by [`retry`], with the number of attempts it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retried<T> {
    pub value: T,
    pub attempts: u32,
}

/// Calls `operation` until it succeeds or the policy's attempts run out.
///
/// The operation receives the 1-based attempt number. The last error is
/// returned when every attempt fails.
pub fn retry<T, F>(policy: RetryPolicy, mut operation: F) -> Result<Retried<T>>
where
    F: FnMut(u32) -> Result<T>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation(attempt) {
            Ok(value) => return Ok(Retried { value, attempts: attempt }),
            Err(err) if attempt < attempts => {
                warn!("attempt {attempt}/{attempts} failed: {err:#}");
                thread::sleep(policy.delay);
                attempt += 1;
            }
            Err(err) => {
                return Err(err.context(format!("Gave up after {attempts} attempt(s)")));
            }
        }
    }
}

/// Captures `invocation`, retrying while it fails to launch or exits non-zero.
///
/// When every attempt fails, the output of the last attempt is returned if
/// that attempt ran; a launch failure on the last attempt is returned as the
/// error.
pub fn capture_with_retry(invocation: &Invocation, policy: RetryPolicy) -> Result<Retried<Captured>> {
    let mut last = None;
    let outcome = retry(policy, |attempt| {
        let captured = match capture(invocation) {
            Ok(captured) => captured,
            Err(err) => {
                last = None;
                return Err(err);
            }
        };
        if captured.success() {
            return Ok(captured);
        }
        let code = captured.exit_code;
        last = Some(Retried {
            value: captured,
            attempts: attempt,
        });
        anyhow::bail!("{invocation} exited with {code:?}")
    });

    match (outcome, last) {
        (Ok(retried), _) => Ok(retried),
        (Err(_), Some(failed)) => Ok(failed),
        (Err(err), None) => Err(err),
    }
}
