//! One full pipeline pass: groups -> deltas -> aggregate -> overlay
//!
//! Every run recomputes from the grouped snapshots; nothing derived is cached
//! or patched between runs. An empty result (say, a range that excludes every
//! delta) is still a valid result and replaces the previous one.

use crate::aggregate::{MeanSeries, mean_series};
use crate::delta::compute_deltas;
use crate::group::EntityGroups;
use crate::model::DeltaPoint;
use crate::query::ChartQuery;
use crate::select::overlay_series;

/// Output of one pipeline run, rebuilt wholesale each time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    /// Ascending, duplicate-free union of delta timestamps in range.
    pub timestamps: Vec<String>,
    /// Mean delta across contributing entities, parallel to `timestamps`.
    pub mean: Vec<f64>,
    /// The selected entity's deltas on the same axis; `None` entries are
    /// gaps. Absent entirely when no entity is selected, the entity is
    /// unknown, or it has fewer than two snapshots.
    pub overlay: Option<Vec<Option<f64>>>,
}

pub fn run_query(groups: &EntityGroups, query: &ChartQuery) -> ChartSeries {
    let MeanSeries { timestamps, values } =
        mean_series(groups, query.metric, query.granularity, &query.range);

    let overlay = query
        .entity
        .as_ref()
        .and_then(|id| groups.get(id))
        .filter(|group| group.len() >= 2)
        .map(|group| {
            let deltas: Vec<DeltaPoint> = compute_deltas(group, query.granularity)
                .into_iter()
                .filter(|delta| query.range.contains(&delta.timestamp))
                .collect();
            overlay_series(&timestamps, &deltas, query.metric)
        });

    ChartSeries {
        timestamps,
        mean: values,
        overlay,
    }
}
