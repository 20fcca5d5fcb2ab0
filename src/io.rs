//! # Record I/O
//!
//! Reads record batches and text lines from a file or stdin, and writes
//! records as JSON Lines.
//!
//! Input records may be a JSON array of objects or a stream of objects
//! (one per line, or simply concatenated).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use crate::{error::Result, record::Record};

/// Reads all input text from `path`, or from stdin when `path` is `None`.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Reads input lines from `path` or stdin.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    Ok(read_text(path)?.lines().map(str::to_string).collect())
}

/// Reads a record batch from `path` or stdin.
pub fn read_records(path: Option<&Path>) -> Result<Vec<Record>> {
    parse_records(&read_text(path)?)
}

/// Parses a JSON array of records or a stream of JSON records.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }

    serde_json::Deserializer::from_str(text)
        .into_iter::<Record>()
        .map(|record| record.map_err(Into::into))
        .collect()
}

/// Writes records as JSON Lines.
pub fn write_records<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
