//! Delta Engine: consecutive differences of cumulative counters
//!
//! Two algorithms share the same adjacent-pair differencing:
//! - Native: every chronologically adjacent snapshot pair, stamped with the
//!   earlier snapshot's timestamp (interval start).
//! - Daily: the group is first collapsed to one representative per calendar
//!   day (the last-observed cumulative value, i.e. the maximal full timestamp
//!   that day), then differenced, stamped with the later day key (interval
//!   end).
//!
//! The asymmetric stamping is intentional and must not be "fixed": the
//! aggregate axis and overlay alignment depend on it.
//!
//! Negative deltas are valid output. Counter resets or corrections in the
//! source are surfaced as-is rather than filtered or clamped.

use crate::model::{DeltaPoint, Granularity, Snapshot};

/// Calendar-day key of a timestamp: its date prefix ("YYYYMMDD" for the hour
/// stamp form). Strings shorter than eight characters are their own day key.
pub fn day_key(timestamp: &str) -> &str {
    timestamp.get(..8).unwrap_or(timestamp)
}

/// Compute one entity's delta series at the requested granularity.
///
/// Snapshots are sorted chronologically (stable compare on the timestamp
/// string) before differencing, so unordered input is fine. Fewer than two
/// snapshots, or in daily mode fewer than two distinct days, yield an empty
/// series: there is no rate of change from one point.
pub fn compute_deltas(group: &[Snapshot], granularity: Granularity) -> Vec<DeltaPoint> {
    let mut sorted: Vec<&Snapshot> = group.iter().collect();
    sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    match granularity {
        Granularity::Native => native_deltas(&sorted),
        Granularity::Daily => daily_deltas(&sorted),
    }
}

fn diff(prev: &Snapshot, curr: &Snapshot, timestamp: String) -> DeltaPoint {
    DeltaPoint {
        timestamp,
        views: curr.views - prev.views,
        vote: curr.vote - prev.vote,
        alarm: curr.alarm - prev.alarm,
        like: curr.like - prev.like,
    }
}

fn native_deltas(sorted: &[&Snapshot]) -> Vec<DeltaPoint> {
    sorted
        .windows(2)
        .map(|pair| diff(pair[0], pair[1], pair[0].timestamp.clone()))
        .collect()
}

fn daily_deltas(sorted: &[&Snapshot]) -> Vec<DeltaPoint> {
    // Sorted input keeps same-day snapshots contiguous, so the per-day
    // representative (maximal full timestamp) is found in one pass.
    let mut by_day: Vec<(&str, &Snapshot)> = Vec::new();
    for &snapshot in sorted {
        let day = day_key(&snapshot.timestamp);
        match by_day.last_mut() {
            Some((last_day, representative)) if *last_day == day => {
                if snapshot.timestamp > representative.timestamp {
                    *representative = snapshot;
                }
            }
            _ => by_day.push((day, snapshot)),
        }
    }
    by_day
        .windows(2)
        .map(|pair| diff(pair[0].1, pair[1].1, pair[1].0.to_owned()))
        .collect()
}
