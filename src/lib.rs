//! # shellkit
//!
//! An interactive shell toolbox for exploring loosely-typed records.
//!
//! Records arrive as JSON from other tools; shellkit lets you discover their
//! fields, pick fields with forgiving patterns, filter and project batches,
//! and render or parse plain text around them.
//!
//! ## Features
//!
//! - **Forgiving field names**: `time` finds `CreationTime`; an exact name wins ties
//! - **Projection and filtering**: all-or-nothing projection, value and no-value filters
//! - **INI parsing**: ordered sections, best-effort with warnings
//! - **Templates**: `{name}` placeholders with an explicit fallback scope chain
//! - **Line parsing**: capture-group regexes into labeled records
//! - **Process helpers**: captured output, passthrough, retry
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod pattern;
pub mod process;
pub mod record;
pub mod text;
pub mod ui;

pub use config::{set_home_override, Config};
pub use error::{Error, Result};
pub use record::{FilterCriteria, Outcome, Record, Report, Resolution, Value};
pub use text::{IniDocument, IniOptions, LineParser, Renderer, Scope};
