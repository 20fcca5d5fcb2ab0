//! # Unique Collection
//!
//! Order-preserving deduplication. The first occurrence of each key wins and
//! output follows first-occurrence order; nothing is re-sorted.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashSet, hash::Hash};

/// Keeps the first occurrence of each distinct item.
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Keeps the first item for each distinct key extracted by `key_fn`.
pub fn unique_by<T, K, I, F>(items: I, mut key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key_fn(item)))
        .collect()
}
