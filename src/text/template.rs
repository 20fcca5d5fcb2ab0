//! # Template Rendering
//!
//! Substitutes `{name}` placeholders from a record, falling back to an
//! explicit chain of scopes supplied by the caller (command-line variables,
//! configured variables, the process environment, ...).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::trace;
use regex::{Captures, Regex};

use crate::{
    constants::PLACEHOLDER_PATTERN,
    error::Result,
    pattern,
    record::{unique, Record, Value},
};

// =============================================================================
// Scopes
// =============================================================================

/// A named-value provider consulted when a record lacks a placeholder's field.
pub trait Scope {
    fn lookup(&self, name: &str) -> Option<Value>;
}

impl Scope for Record {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Scope for IndexMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.get(name).map(|v| Value::from(v.as_str()))
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Scope for Environment {
    fn lookup(&self, name: &str) -> Option<Value> {
        std::env::var(name).ok().map(Value::from)
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Renders templates against records and an ordered scope chain.
pub struct Renderer<'a> {
    placeholder: Regex,
    scopes: Vec<&'a dyn Scope>,
}

impl<'a> Renderer<'a> {
    pub fn new() -> Result<Self> {
        Ok(Self {
            placeholder: pattern::as_authored(PLACEHOLDER_PATTERN)?,
            scopes: Vec::new(),
        })
    }

    /// Appends a fallback scope. Scopes are consulted in the order added.
    #[must_use]
    pub fn with_scope(mut self, scope: &'a dyn Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    /// Placeholder identifiers in order of first appearance, without duplicates.
    pub fn placeholders(&self, template: &str) -> Vec<String> {
        unique(
            self.placeholder
                .captures_iter(template)
                .map(|caps| caps[1].to_string()),
        )
    }

    /// Renders `template` for one record.
    ///
    /// Each placeholder takes the first truthy value from the record, then the
    /// scopes in order, rendered as trimmed text. Placeholders with no truthy
    /// value anywhere are left as written. Substituted text is never expanded
    /// again.
    pub fn render(&self, record: &Record, template: &str) -> String {
        let resolved: HashMap<String, Option<String>> = self
            .placeholders(template)
            .into_iter()
            .map(|name| {
                let text = self
                    .resolve(record, &name)
                    .map(|value| value.to_string().trim().to_string());
                if text.is_none() {
                    trace!("placeholder '{name}' left unresolved");
                }
                (name, text)
            })
            .collect();

        self.placeholder
            .replace_all(template, |caps: &Captures<'_>| {
                resolved
                    .get(&caps[1])
                    .and_then(Clone::clone)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Renders `template` once per record, in input order.
    pub fn render_all(&self, records: &[Record], template: &str) -> Vec<String> {
        records
            .iter()
            .map(|record| self.render(record, template))
            .collect()
    }

    fn resolve(&self, record: &Record, name: &str) -> Option<Value> {
        std::iter::once(record as &dyn Scope)
            .chain(self.scopes.iter().copied())
            .filter_map(|scope| scope.lookup(name))
            .find(Value::is_truthy)
    }
}
