//! # Configuration
//!
//! Effective settings: the global config file, with command-line flags
//! applied on top by the individual commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::{io::IsTerminal, time::Duration};

use anyhow::Result;
use indexmap::IndexMap;

pub use self::global::{set_home_override, GlobalConfig};
use crate::{process::RetryPolicy, text::IniOptions};

/// Effective configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
}

impl Config {
    /// Loads configuration from the global config file (or defaults).
    pub fn load() -> Result<Self> {
        Ok(Self {
            global: GlobalConfig::load()?,
        })
    }

    /// INI parser options from config.
    pub fn ini_options(&self) -> IniOptions {
        IniOptions {
            comment_marker: self.global.comment_marker.clone(),
            keep_empty_sections: self.global.keep_empty_sections,
        }
    }

    /// Retry policy from config.
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.global.retry_attempts,
            delay: Duration::from_millis(self.global.retry_delay_ms),
        }
    }

    /// Template variables from config.
    pub const fn variables(&self) -> &IndexMap<String, String> {
        &self.global.variables
    }

    /// Whether stdout output should be colorized.
    pub fn color_stdout(&self) -> bool {
        self.global.color && std::io::stdout().is_terminal()
    }

    /// Whether stderr output should be colorized.
    pub fn color_stderr(&self) -> bool {
        self.global.color && std::io::stderr().is_terminal()
    }
}
