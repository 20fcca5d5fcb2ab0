//! # Line Parser
//!
//! Matches text lines against a capture-group regex and turns the captures
//! into a bare value or a labeled record.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use regex::Regex;

use crate::{
    error::{Error, Result},
    pattern,
    record::{Record, Value},
};

/// A compiled line pattern with optional capture labels.
#[derive(Debug, Clone)]
pub struct LineParser {
    regex: Regex,
    names: Vec<String>,
}

impl LineParser {
    /// Compiles `line_pattern` as authored (case-sensitive).
    ///
    /// With no `names`, matches yield the text of capture group 1. Otherwise
    /// `names[i]` labels group `i + 1`; extra groups are ignored and names
    /// without a participating group are null.
    pub fn new(line_pattern: &str, names: Vec<String>) -> Result<Self> {
        Ok(Self {
            regex: pattern::as_authored(line_pattern)?,
            names,
        })
    }

    /// Parses one line.
    ///
    /// A non-matching line yields `None`, or [`Error::ParseMismatch`] when
    /// `enforce` is set.
    pub fn parse(&self, line: &str, enforce: bool) -> Result<Option<Value>> {
        let Some(caps) = self.regex.captures(line) else {
            if enforce {
                return Err(Error::ParseMismatch {
                    line: line.to_string(),
                });
            }
            return Ok(None);
        };

        let group = |index: usize| {
            caps.get(index)
                .map_or(Value::Null, |m| Value::from(m.as_str()))
        };

        if self.names.is_empty() {
            return Ok(Some(group(1)));
        }

        let record: Record = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), group(i + 1)))
            .collect();

        Ok(Some(Value::Record(record)))
    }

    /// Parses every line, skipping non-matching ones unless `enforce` is set,
    /// in which case the first mismatch fails the whole call.
    pub fn parse_all<I, S>(&self, lines: I, enforce: bool) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for line in lines {
            if let Some(value) = self.parse(line.as_ref(), enforce)? {
                parsed.push(value);
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_bare_value_from_first_group() {
        let parser = LineParser::new(r"line (\d+)", vec![]).unwrap();
        assert_eq!(parser.parse("line 42", false).unwrap(), Some(Value::from("42")));
    }

    #[test]
    fn test_labeled_record() {
        let parser =
            LineParser::new(r"^(\w+)\s+(\d+)\s+(\S+)$", names(&["user", "pid"])).unwrap();
        let value = parser.parse("root 1 /sbin/init", false).unwrap().unwrap();

        let Value::Record(record) = value else {
            panic!("expected a record");
        };
        assert_eq!(record.names().collect::<Vec<_>>(), ["user", "pid"]);
        assert_eq!(record.get("pid"), Some(&Value::from("1")));
    }

    #[test]
    fn test_names_beyond_groups_are_null() {
        let parser = LineParser::new(r"(a)(x)?", names(&["first", "second", "third"])).unwrap();
        let Some(Value::Record(record)) = parser.parse("a", false).unwrap() else {
            panic!("expected a record");
        };
        assert_eq!(record.get("first"), Some(&Value::from("a")));
        assert_eq!(record.get("second"), Some(&Value::Null));
        assert_eq!(record.get("third"), Some(&Value::Null));
    }

    #[test]
    fn test_mismatch_skipped_without_enforce() {
        let parser = LineParser::new(r"line (\d+)", vec![]).unwrap();
        let parsed = parser
            .parse_all(["line 1", "line three", "line 3"], false)
            .unwrap();
        assert_eq!(parsed, [Value::from("1"), Value::from("3")]);
    }

    #[test]
    fn test_mismatch_fails_with_enforce() {
        let parser = LineParser::new(r"line (\d+)", vec![]).unwrap();
        let err = parser
            .parse_all(["line 1", "line three"], true)
            .unwrap_err();
        assert!(matches!(err, Error::ParseMismatch { ref line } if line == "line three"));
    }

    #[test]
    fn test_pattern_is_case_sensitive() {
        let parser = LineParser::new(r"line (\d+)", vec![]).unwrap();
        assert_eq!(parser.parse("LINE 1", false).unwrap(), None);
    }
}
