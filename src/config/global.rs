//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/shellkit/config`.
//! The file is optional; a missing file means built-in defaults.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMMENT_MARKER, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_MS, GLOBAL_CONFIG_DIR,
    GLOBAL_CONFIG_FILENAME,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/shellkit/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Comment marker for INI parsing
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,

    /// Whether INI parsing keeps sections without keys
    #[serde(default)]
    pub keep_empty_sections: bool,

    /// Whether to colorize terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Attempts for `sk run --retry` when no count is given
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Delay between retry attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Template variables consulted after record fields and `--var` values
    #[serde(default)]
    pub variables: IndexMap<String, String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            comment_marker: default_comment_marker(),
            keep_empty_sections: false,
            color: true,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            variables: IndexMap::new(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

fn default_comment_marker() -> String {
    DEFAULT_COMMENT_MARKER.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_retry_attempts() -> u32 {
    DEFAULT_RETRY_ATTEMPTS
}

#[allow(clippy::missing_const_for_fn)]
fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/shellkit/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the global config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            debug!("no home directory; using default config");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!("no config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Returns true if created, false if it already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, Self::default().to_commented_toml())
            .with_context(|| format!("Failed to write global config: {}", path.display()))?;
        Ok(true)
    }

    /// Renders the config with explanatory comments for every option.
    fn to_commented_toml(&self) -> String {
        format!(
            r#"# shellkit Global Configuration
# Location: ~/.config/shellkit/config

# Comment marker used when parsing INI files (`sk ini`).
# Everything from the first occurrence of the marker to the end of the line is ignored.
# Default: ";"
comment_marker = "{comment_marker}"

# Keep INI sections that have no keys.
# Default: false
keep_empty_sections = {keep_empty_sections}

# Colorize output when writing to a terminal.
# Default: true
color = {color}

# Attempts made by `sk run --retry` when no count is given, and the delay between them.
# Default: 3 attempts, 500 ms
retry_attempts = {retry_attempts}
retry_delay_ms = {retry_delay_ms}

# Variables available to `sk render` placeholders.
# Record fields and --var values take precedence; the environment is consulted last.
[variables]
# project = "shellkit"
"#,
            comment_marker = self.comment_marker,
            keep_empty_sections = self.keep_empty_sections,
            color = self.color,
            retry_attempts = self.retry_attempts,
            retry_delay_ms = self.retry_delay_ms,
        )
    }
}
