//! # UI Utilities
//!
//! Console rendering: named colors, warnings, and the guidance shown when a
//! field pattern is missing or ambiguous. Guidance goes to stderr so stdout
//! only ever carries data.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Write as _;

use owo_colors::{AnsiColors, OwoColorize};

use crate::{
    error::{Error, Result},
    record::Report,
};

// =============================================================================
// Colors
// =============================================================================

/// Looks up a color by name.
///
/// Case, `-` and `_` are ignored. `dark*` names map to the normal palette and
/// plain names of the bright palette are accepted as `bright*`.
pub fn color_by_name(name: &str) -> Result<AnsiColors> {
    let key: String = name
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase();
    let key = key.strip_prefix("dark").unwrap_or(&key);

    let color = match key {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "gray" | "grey" | "brightblack" => AnsiColors::BrightBlack,
        "brightred" => AnsiColors::BrightRed,
        "brightgreen" => AnsiColors::BrightGreen,
        "brightyellow" => AnsiColors::BrightYellow,
        "brightblue" => AnsiColors::BrightBlue,
        "brightmagenta" => AnsiColors::BrightMagenta,
        "brightcyan" => AnsiColors::BrightCyan,
        "brightwhite" => AnsiColors::BrightWhite,
        "default" => AnsiColors::Default,
        _ => {
            return Err(Error::UnknownColor {
                name: name.to_string(),
            })
        }
    };
    Ok(color)
}

/// Renders `text` in the named color, or verbatim when color is disabled.
///
/// The color name is validated either way.
pub fn colorize(text: &str, color_name: &str, enabled: bool) -> Result<String> {
    let color = color_by_name(color_name)?;
    Ok(paint(text, color, enabled))
}

fn paint(text: &str, color: AnsiColors, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

// =============================================================================
// Warnings and Reports
// =============================================================================

/// Prints warnings with yellow prefix.
pub fn print_warnings<T: ToString>(warnings: &[T], color: bool) {
    for warning in warnings {
        eprintln!(
            "{} {}",
            paint("warning:", AnsiColors::Yellow, color),
            warning.to_string()
        );
    }
}

/// Formats a resolution report as user guidance.
pub fn format_report(report: &Report, color: bool) -> String {
    let (header, items): (String, Vec<String>) = match report {
        Report::AvailableFields(fields) => ("Available fields:".to_string(), fields.clone()),
        Report::NotFound { pattern } => (
            format!(
                "{} no field matches '{pattern}'",
                paint("warning:", AnsiColors::Yellow, color)
            ),
            Vec::new(),
        ),
        Report::Ambiguous {
            pattern,
            candidates,
        } => (
            format!(
                "{} '{pattern}' is ambiguous, candidates:",
                paint("warning:", AnsiColors::Yellow, color)
            ),
            candidates.clone(),
        ),
        Report::DistinctValues { field, values } => (
            format!("Values of {field}:"),
            values.iter().map(ToString::to_string).collect(),
        ),
    };

    let mut out = header;
    for item in items {
        let _ = write!(out, "\n  {}", paint(&item, AnsiColors::Cyan, color));
    }
    out
}

/// Prints reports to stderr.
pub fn print_reports(reports: &[Report], color: bool) {
    for report in reports {
        eprintln!("{}", format_report(report, color));
    }
}
