//! # INI Parser
//!
//! Parses line-oriented `[section]` / `key = value` text into an ordered
//! document. Parsing is best-effort: unrecognized lines become warnings and
//! never abort the parse.
//!
//! Keys that appear before any section header are hoisted to the top level of
//! the document, next to the sections, unless a section of the same name exists.
//! Colliding keys stay nested under the sectionless section `""`.
//!
//! Section and key names are case-insensitive, like record fields: the first
//! spelling seen is kept and later spellings update it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashSet, fmt};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Serialize;

use crate::{
    constants::{
        DEFAULT_COMMENT_MARKER, INI_KEY_VALUE_PATTERN, INI_SECTION_PATTERN, SECTIONLESS,
    },
    error::Result,
    pattern,
};

/// Keys and values of one section.
pub type Section = IndexMap<String, String>;

// =============================================================================
// Document
// =============================================================================

/// A top-level document entry: a named section or a hoisted sectionless key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IniEntry {
    Section(Section),
    Value(String),
}

impl IniEntry {
    pub const fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(section) => Some(section),
            Self::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Section(_) => None,
            Self::Value(value) => Some(value),
        }
    }
}

/// Ordered INI document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IniDocument {
    entries: IndexMap<String, IniEntry>,
}

impl IniDocument {
    /// Looks up a top-level entry, exact spelling first, then ignoring case.
    pub fn get(&self, name: &str) -> Option<&IniEntry> {
        self.entries.get(name).or_else(|| {
            self.entries
                .get_index_of(&spelling(&self.entries, name))
                .map(|index| &self.entries[index])
        })
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.get(name).and_then(IniEntry::as_section)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(IniEntry::as_value)
    }

    /// Top-level names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Options and Warnings
// =============================================================================

/// Parser settings.
#[derive(Debug, Clone)]
pub struct IniOptions {
    /// Everything from the first occurrence of this marker is ignored.
    pub comment_marker: String,
    /// Keep sections that end up without keys.
    pub keep_empty_sections: bool,
}

impl Default for IniOptions {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
            keep_empty_sections: false,
        }
    }
}

/// A line the parser skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniWarning {
    /// 1-based line number.
    pub line_number: usize,
    pub line: String,
}

impl fmt::Display for IniWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: unrecognized content '{}'",
            self.line_number, self.line
        )
    }
}

/// Parsed document plus the lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedIni {
    pub document: IniDocument,
    pub warnings: Vec<IniWarning>,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses INI text.
pub fn parse_str(text: &str, options: &IniOptions) -> Result<ParsedIni> {
    parse(text.lines(), options)
}

/// Parses INI lines.
pub fn parse<I, S>(lines: I, options: &IniOptions) -> Result<ParsedIni>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let section_re = pattern::as_authored(INI_SECTION_PATTERN)?;
    let key_value_re = pattern::as_authored(INI_KEY_VALUE_PATTERN)?;

    let mut sections: IndexMap<String, Section> = IndexMap::new();
    sections.insert(SECTIONLESS.to_string(), Section::new());
    let mut current = SECTIONLESS.to_string();
    let mut warnings = Vec::new();

    for (index, raw) in lines.into_iter().enumerate() {
        let line = strip_comment(raw.as_ref(), &options.comment_marker).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = section_re.captures(line) {
            current = spelling(&sections, caps[1].trim());
            sections.entry(current.clone()).or_default();
            continue;
        }

        if let Some(caps) = key_value_re.captures(line) {
            let key = caps[1].trim();
            if !key.is_empty() {
                let section = sections.entry(current.clone()).or_default();
                let key = spelling(section, key);
                section.insert(key, caps[2].trim().to_string());
                continue;
            }
        }

        let warning = IniWarning {
            line_number: index + 1,
            line: line.to_string(),
        };
        warn!("{warning}");
        warnings.push(warning);
    }

    if !options.keep_empty_sections {
        sections.retain(|_, section| !section.is_empty());
    }

    let document = merge_sectionless(sections, options.keep_empty_sections);
    debug!("parsed INI document with {} entries", document.len());

    Ok(ParsedIni { document, warnings })
}

/// The spelling `name` already has among the keys of `map`, or `name` itself.
fn spelling<V>(map: &IndexMap<String, V>, name: &str) -> String {
    let folded = name.to_lowercase();
    map.keys()
        .find(|existing| existing.to_lowercase() == folded)
        .map_or_else(|| name.to_string(), Clone::clone)
}

fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return line;
    }
    line.find(marker).map_or(line, |pos| &line[..pos])
}

/// Hoists sectionless keys to the top level where they don't collide with a
/// section name. The sectionless section survives only if something stays in
/// it or empty sections are kept.
fn merge_sectionless(sections: IndexMap<String, Section>, keep_empty: bool) -> IniDocument {
    let section_names: HashSet<String> = sections
        .keys()
        .filter(|name| name.as_str() != SECTIONLESS)
        .map(|name| name.to_lowercase())
        .collect();

    let mut entries = IndexMap::new();
    for (name, section) in sections {
        if name != SECTIONLESS {
            entries.insert(name, IniEntry::Section(section));
            continue;
        }

        let mut colliding = Section::new();
        for (key, value) in section {
            if section_names.contains(&key.to_lowercase()) {
                colliding.insert(key, value);
            } else {
                entries.insert(key, IniEntry::Value(value));
            }
        }
        if keep_empty || !colliding.is_empty() {
            entries.insert(name, IniEntry::Section(colliding));
        }
    }

    IniDocument { entries }
}
