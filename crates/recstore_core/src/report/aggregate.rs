//! Stateless aggregate helpers over record slices.
//!
//! # Responsibility
//! - Sum numeric projections, group with per-group sums, rank groups, and
//!   deduplicate field values.
//!
//! # Invariants
//! - Group order is first-encountered order; ranking is a stable sort, so
//!   ties keep discovery order.
//! - Helpers read the slice in insertion order and never mutate it.

/// Sums a numeric projection over all records.
pub fn sum_by<T, F>(records: &[T], value: F) -> f64
where
    F: Fn(&T) -> f64,
{
    records.iter().map(value).sum()
}

/// Sums a numeric projection over records satisfying `keep`.
pub fn sum_by_filtered<T, P, F>(records: &[T], mut keep: P, value: F) -> f64
where
    P: FnMut(&T) -> bool,
    F: Fn(&T) -> f64,
{
    records
        .iter()
        .filter(|record| keep(record))
        .map(value)
        .sum()
}

/// Groups records by `key` and sums `value` per group.
///
/// Groups appear in first-encountered order. Lookup is a linear scan,
/// matching the store's expected collection size.
pub fn group_sum<T, K, KF, VF>(records: &[T], key: KF, value: VF) -> Vec<(K, f64)>
where
    K: PartialEq,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    let mut groups: Vec<(K, f64)> = Vec::new();
    for record in records {
        let group_key = key(record);
        let amount = value(record);
        match groups.iter_mut().find(|(existing, _)| *existing == group_key) {
            Some((_, total)) => *total += amount,
            None => groups.push((group_key, amount)),
        }
    }
    groups
}

/// Sorts grouped aggregates descending by aggregate value.
///
/// The sort is stable: ties keep the original group-discovery order.
pub fn rank_groups<K>(mut groups: Vec<(K, f64)>) -> Vec<(K, f64)> {
    groups.sort_by(|a, b| b.1.total_cmp(&a.1));
    groups
}

/// Returns the highest-aggregate group, or `None` for an empty input.
pub fn top_group<K>(groups: Vec<(K, f64)>) -> Option<(K, f64)> {
    rank_groups(groups).into_iter().next()
}

/// Deduplicates a field projection, preserving order of first occurrence.
pub fn distinct_by<T, V, F>(records: &[T], field: F) -> Vec<V>
where
    V: PartialEq,
    F: Fn(&T) -> V,
{
    let mut values: Vec<V> = Vec::new();
    for record in records {
        let value = field(record);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}
