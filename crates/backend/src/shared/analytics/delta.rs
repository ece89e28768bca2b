use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use contracts::shared::period::{PeriodAggregate, PeriodDelta, PeriodKey, PeriodValue};

use crate::shared::error::{AnalyticsError, Result};

/// The `n` largest distinct keys, largest first.
pub fn n_largest<K: Ord + Copy + std::hash::Hash>(keys: impl IntoIterator<Item = K>, n: usize) -> Vec<K> {
    if n == 0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut heap: BinaryHeap<Reverse<K>> = BinaryHeap::with_capacity(n + 1);
    for key in keys {
        if !seen.insert(key) {
            continue;
        }
        heap.push(Reverse(key));
        if heap.len() > n {
            heap.pop();
        }
    }

    let mut largest: Vec<K> = heap.into_iter().map(|Reverse(k)| k).collect();
    largest.sort_by(|a, b| b.cmp(a));
    largest
}

/// Compare the latest period of `aggregate` with the one before it.
///
/// Fails with `EmptyRange` when fewer than two distinct periods exist; a
/// zero delta would be indistinguishable from "no change".
pub fn top_n_delta(aggregate: &PeriodAggregate) -> Result<PeriodDelta> {
    let keys = n_largest(aggregate.rows.iter().map(|r| r.key), 2);
    let (current, previous) = match keys.as_slice() {
        [current, previous] => (*current, *previous),
        _ => {
            return Err(AnalyticsError::empty_range(format!(
                "need two {} periods to compute a change, found {}",
                aggregate.period.label().to_lowercase(),
                keys.len()
            )))
        }
    };

    let current = value_of(aggregate, current)?;
    let previous = value_of(aggregate, previous)?;
    Ok(PeriodDelta {
        current,
        previous,
        delta: current.value - previous.value,
    })
}

fn value_of(aggregate: &PeriodAggregate, key: PeriodKey) -> Result<PeriodValue> {
    aggregate
        .get(&key)
        .map(|value| PeriodValue { key, value })
        .ok_or_else(|| AnalyticsError::empty_range(format!("period {} has no value", key)))
}
