//! Tests for the delta/aggregation engine
//!
//! Tests are organized by topic:
//! - `store` - tabular ingestion and its degradation rules
//! - `delta` - native and daily differencing
//! - `aggregate` - cross-entity mean series and range filtering
//! - `pipeline` - full query runs and overlay alignment

mod store;

use crate::model::{EntityId, Snapshot};

/// Snapshot with only the views counter set; the other metrics stay zero.
pub(crate) fn snap(entity: &str, timestamp: &str, views: f64) -> Snapshot {
    Snapshot {
        entity: EntityId::from(entity),
        timestamp: timestamp.to_owned(),
        views,
        vote: 0.0,
        alarm: 0.0,
        like: 0.0,
    }
}

/// Snapshot with all four cumulative counters set.
pub(crate) fn snap_full(
    entity: &str,
    timestamp: &str,
    views: f64,
    vote: f64,
    alarm: f64,
    like: f64,
) -> Snapshot {
    Snapshot {
        entity: EntityId::from(entity),
        timestamp: timestamp.to_owned(),
        views,
        vote,
        alarm,
        like,
    }
}
