//! Series Selector: one entity's deltas aligned to the aggregate axis

use rustc_hash::FxHashMap;

use crate::model::{DeltaPoint, Metric};

/// Align one entity's delta series to the aggregate timestamp axis.
///
/// The output always has exactly the axis' length. Positions where the entity
/// produced no delta are `None`, never zero; a renderer must draw them as
/// gaps, since zero would claim the counter did not move when in fact there
/// was no reading at all.
pub fn overlay_series(axis: &[String], deltas: &[DeltaPoint], metric: Metric) -> Vec<Option<f64>> {
    let by_timestamp: FxHashMap<&str, f64> = deltas
        .iter()
        .map(|delta| (delta.timestamp.as_str(), delta.metric(metric)))
        .collect();
    axis.iter()
        .map(|ts| by_timestamp.get(ts.as_str()).copied())
        .collect()
}
