//! Dense-rank top-k ranking over distinct values.
//!
//! This module implements the "high earner" selection rule: an entity ranks
//! if its value is among the top `k` *distinct* values, so ties share a rank
//! (dense ranking) and a tie on the k-th value never pushes anyone out.
//!
//! The function is standalone and storage-free — it takes plain
//! `(entity, value)` pairs so it can be unit- and property-tested without
//! any database fixture.

use std::collections::BTreeSet;

/// Returns every item whose value is among the top `k` distinct values.
///
/// Ranking uses dense-rank semantics: ties in value share a rank, and the
/// next distinct value takes the following rank. With `k = 3` and values
/// `[10, 10, 9, 8, 7]`, the items valued 10, 10, 9 and 8 are all selected
/// (distinct values 10, 9, 8 fill ranks 1..=3) while 7 is excluded.
///
/// The output order is deterministic: by value (descending when `descending`
/// is `true`, ascending otherwise), then by the entity identity returned by
/// `identity`, ascending. Fewer than `k` distinct values returns all items;
/// empty input or `k == 0` returns an empty vector.
///
/// # Examples
///
/// ```
/// use payroll_engine::ranking::top_by_distinct_value;
///
/// let items = vec![("a", 10), ("b", 10), ("c", 9), ("d", 8), ("e", 7)];
/// let top = top_by_distinct_value(items, 3, true, |name| *name);
///
/// let names: Vec<&str> = top.iter().map(|(name, _)| *name).collect();
/// assert_eq!(names, vec!["a", "b", "c", "d"]);
/// ```
pub fn top_by_distinct_value<E, V, K, F>(
    items: Vec<(E, V)>,
    k: usize,
    descending: bool,
    identity: F,
) -> Vec<(E, V)>
where
    V: Ord + Copy,
    K: Ord,
    F: Fn(&E) -> K,
{
    if k == 0 || items.is_empty() {
        return Vec::new();
    }

    let distinct: BTreeSet<V> = items.iter().map(|(_, value)| *value).collect();
    let selected: BTreeSet<V> = if descending {
        distinct.into_iter().rev().take(k).collect()
    } else {
        distinct.into_iter().take(k).collect()
    };

    let mut ranked: Vec<(E, V)> = items
        .into_iter()
        .filter(|(_, value)| selected.contains(value))
        .collect();

    ranked.sort_by(|(left, left_value), (right, right_value)| {
        let by_value = if descending {
            right_value.cmp(left_value)
        } else {
            left_value.cmp(right_value)
        };
        by_value.then_with(|| identity(left).cmp(&identity(right)))
    });

    ranked
}
