// crates/dinerdb-core/src/order.rs

//! Ordering and aggregation helpers shared by all four stores.
//!
//! Every comparator used with these helpers must be a total order (each
//! chain ends on the id), which keeps results deterministic.

use crate::model::Id;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Inserts `record` before the first element that does not compare less,
/// returning the slot it landed in.
///
/// Equivalent to one step of a stable insertion sort.
///
/// ```rust
/// use dinerdb_core::order::insert_ordered;
///
/// let mut v = vec![10, 30];
/// assert_eq!(insert_ordered(&mut v, 20, |a, b| a.cmp(b)), 1);
/// assert_eq!(v, [10, 20, 30]);
/// ```
pub fn insert_ordered<T, F>(records: &mut Vec<T>, record: T, cmp: F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let slot = records.partition_point(|r| cmp(r, &record) == Ordering::Less);
    records.insert(slot, record);
    slot
}

/// Copy of `subset` re-ordered by `cmp` (stable).
pub fn sorted_by<T, F>(subset: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut out = subset.to_vec();
    out.sort_by(|a, b| cmp(a, b));
    out
}

/// Running aggregate for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub count: u32,
    pub sum: u64,
}

impl Tally {
    /// Mean scaled by 100 and truncated, so ranking never compares floats.
    pub fn scaled_mean(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.sum * 100 / u64::from(self.count)
        }
    }
}

/// Groups `(key, value)` pairs, counting occurrences and summing values.
///
/// ```rust
/// use dinerdb_core::order::tally;
///
/// let t = tally([(7, 4), (3, 1), (7, 2)]);
/// assert_eq!(t[&7].count, 2);
/// assert_eq!(t[&7].sum, 6);
/// assert_eq!(t.keys().copied().collect::<Vec<_>>(), [3, 7]);
/// ```
pub fn tally<K, I>(items: I) -> BTreeMap<K, Tally>
where
    K: Ord,
    I: IntoIterator<Item = (K, u64)>,
{
    let mut groups: BTreeMap<K, Tally> = BTreeMap::new();
    for (key, value) in items {
        let entry = groups.entry(key).or_default();
        entry.count += 1;
        entry.sum += value;
    }
    groups
}

/// Top `k` keys by count, descending. Equal counts keep ascending key order.
/// Fewer than `k` groups give a shorter result.
pub fn rank_by_count<K: Ord + Clone>(groups: &BTreeMap<K, Tally>, k: usize) -> Vec<K> {
    rank_by(groups, k, |t| u64::from(t.count))
}

/// Top `k` keys by scaled mean value, descending, ties as in [`rank_by_count`].
pub fn rank_by_mean<K: Ord + Clone>(groups: &BTreeMap<K, Tally>, k: usize) -> Vec<K> {
    rank_by(groups, k, Tally::scaled_mean)
}

fn rank_by<K, F>(groups: &BTreeMap<K, Tally>, k: usize, score: F) -> Vec<K>
where
    K: Ord + Clone,
    F: Fn(&Tally) -> u64,
{
    let mut ranked: Vec<(&K, u64)> = groups.iter().map(|(key, t)| (key, score(t))).collect();
    // stable: BTreeMap order survives among equal scores
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(k)
        .map(|(key, _)| key.clone())
        .collect()
}

/// Ids present in both inputs, in `a`'s order, without repeats.
pub fn common_ids(a: &[Id], b: &[Id]) -> Vec<Id> {
    let in_b: BTreeSet<Id> = b.iter().copied().collect();
    let mut seen = BTreeSet::new();
    a.iter()
        .copied()
        .filter(|id| in_b.contains(id) && seen.insert(*id))
        .collect()
}

/// Ids of `a` missing from `b`, in `a`'s order, without repeats.
pub fn exclusive_ids(a: &[Id], b: &[Id]) -> Vec<Id> {
    let in_b: BTreeSet<Id> = b.iter().copied().collect();
    let mut seen = BTreeSet::new();
    a.iter()
        .copied()
        .filter(|id| !in_b.contains(id) && seen.insert(*id))
        .collect()
}

/// `a`-only ids followed by `b`-only ids.
///
/// ```rust
/// use dinerdb_core::order::symmetric_difference;
///
/// assert_eq!(symmetric_difference(&[1, 2, 3], &[3, 4]), [1, 2, 4]);
/// ```
pub fn symmetric_difference(a: &[Id], b: &[Id]) -> Vec<Id> {
    let mut out = exclusive_ids(a, b);
    out.extend(exclusive_ids(b, a));
    out
}
