//! # Text
//!
//! Parsers and renderers for plain text: INI files, `{name}` templates and
//! regex-labeled lines.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod ini;
pub mod line;
pub mod template;

pub use self::{
    ini::{IniDocument, IniEntry, IniOptions, IniWarning, ParsedIni},
    line::LineParser,
    template::{Environment, Renderer, Scope},
};
