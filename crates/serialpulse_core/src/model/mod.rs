//! Data model for snapshots and derived delta series

mod ids;
mod records;

pub use ids::EntityId;
pub use records::{DeltaPoint, EntityInfo, Granularity, Metric, Snapshot};
