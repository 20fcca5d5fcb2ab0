//! # Sequence Helpers
//!
//! Small pipeline helpers over fully buffered sequences.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// The first `n` items (fewer if the sequence is shorter).
pub fn first<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// The last `n` items (fewer if the sequence is shorter).
pub fn last<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// True if any item satisfies `predicate`. False for an empty sequence.
pub fn any<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().any(predicate)
}

/// True if every item satisfies `predicate`. True for an empty sequence.
pub fn all<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().all(predicate)
}

/// Median of `values`: the middle value of an odd-length input, the mean of
/// the two middle values of an even-length one. `None` for empty input.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
