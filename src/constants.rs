//! # Constants
//!
//! Centralized constants for magic values used throughout shellkit.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Record Toolkit
// =============================================================================

/// Pattern used when the caller does not restrict field names.
pub const MATCH_ALL_PATTERN: &str = ".*";

/// Placeholder syntax recognized by the template renderer: `{identifier}`.
pub const PLACEHOLDER_PATTERN: &str = r"\{([^}]+)\}";

// =============================================================================
// INI Format
// =============================================================================

/// Default comment marker for INI files.
pub const DEFAULT_COMMENT_MARKER: &str = ";";

/// Section header line: `[name]`.
pub const INI_SECTION_PATTERN: &str = r"^\[([^\]]+)\]$";

/// Key/value line: `key = value` (first `=` is the delimiter).
pub const INI_KEY_VALUE_PATTERN: &str = r"^([^=]+)=(.*)$";

/// Name of the implicit section holding keys that precede any header.
pub const SECTIONLESS: &str = "";

// =============================================================================
// Process Helpers
// =============================================================================

/// Default number of attempts for retried commands.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Default delay between retry attempts, in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "shellkit";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
