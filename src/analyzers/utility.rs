use indexmap::IndexMap;
use std::hash::Hash;

/// Counts occurrences, keeping distinct values in first-seen order.
pub fn value_counts<T, I>(values: I) -> IndexMap<T, usize>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts = IndexMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value and its count. Returns `None` for empty input.
///
/// On a tie the winner is the value that was seen first.
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in value_counts(values) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best
}

/// Counts sorted by descending frequency; ties keep first-seen order.
pub fn ranked<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<_> = value_counts(values).into_iter().collect();
    // stable sort
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
