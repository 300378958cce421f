//! Aggregator: cross-entity mean delta series
//!
//! The output axis is the ascending union of delta timestamps across all
//! eligible entities, not a fixed grid. The mean at each timestamp divides by
//! however many entities produced a delta there, so the sample size varies
//! along the x-axis. That is a property of the data, not something to
//! normalize away.

use rustc_hash::FxHashMap;

use crate::delta::compute_deltas;
use crate::group::EntityGroups;
use crate::model::{Granularity, Metric};

/// Inclusive date-range filter over timestamp strings.
///
/// Comparison is lexicographic, so bounds must be supplied in the same string
/// format as the stored timestamps. An unset bound imposes no restriction on
/// that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn contains(&self, timestamp: &str) -> bool {
        if self.start.as_deref().is_some_and(|start| timestamp < start) {
            return false;
        }
        if self.end.as_deref().is_some_and(|end| timestamp > end) {
            return false;
        }
        true
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// The mean delta series on the union timestamp axis.
///
/// `timestamps` is strictly ascending and duplicate-free; `values` is
/// parallel to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeanSeries {
    pub timestamps: Vec<String>,
    pub values: Vec<f64>,
}

/// Aggregate all entities' deltas into a mean series for one metric.
///
/// Groups with fewer than two snapshots are skipped entirely; a single
/// reading cannot produce a rate of change.
pub fn mean_series(
    groups: &EntityGroups,
    metric: Metric,
    granularity: Granularity,
    range: &DateRange,
) -> MeanSeries {
    let mut sums: FxHashMap<String, (f64, u32)> = FxHashMap::default();
    for group in groups.values() {
        if group.len() < 2 {
            continue;
        }
        for delta in compute_deltas(group, granularity) {
            if !range.contains(&delta.timestamp) {
                continue;
            }
            let value = delta.metric(metric);
            let entry = sums.entry(delta.timestamp).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    let mut timestamps: Vec<String> = sums.keys().cloned().collect();
    timestamps.sort();
    let values = timestamps
        .iter()
        .map(|ts| {
            let (sum, count) = sums[ts.as_str()];
            sum / f64::from(count)
        })
        .collect();
    MeanSeries { timestamps, values }
}
