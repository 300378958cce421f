//! Delta/aggregation engine for per-entity cumulative metric snapshots
//!
//! This crate turns time-stamped cumulative counter readings (views, votes,
//! alarms, likes for serialized novels) into period-over-period delta series:
//! - Grouping raw snapshots by entity and sorting them chronologically
//! - Consecutive differencing at native snapshot granularity or rolled up to
//!   one representative per calendar day
//! - Cross-entity mean series keyed by timestamp, with optional inclusive
//!   date-range filtering
//! - Single-entity overlay series aligned to the mean series' timestamp axis
//!
//! Everything here is pure computation over in-memory records. Reading files,
//! selecting entities, and drawing charts belong to the front end.

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod delta;
pub mod error;
pub mod group;
pub mod pipeline;
pub mod select;
pub mod store;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;
pub mod query;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use aggregate::{DateRange, MeanSeries, mean_series};
pub use delta::{compute_deltas, day_key};
pub use error::StoreError;
pub use group::{EntityGroups, group_by_entity};
pub use model::{DeltaPoint, EntityId, EntityInfo, Granularity, Metric, Snapshot};
pub use pipeline::{ChartSeries, run_query};
pub use query::ChartQuery;
pub use select::overlay_series;
pub use store::{parse_entities, parse_snapshots};
