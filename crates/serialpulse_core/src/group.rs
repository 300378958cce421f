//! Entity Grouper: partitions snapshots by entity identifier
//!
//! Single pass with a map accumulator; relative input order is preserved
//! within each group. Chronological sorting happens later, in the delta
//! engine, so the grouper stays a pure O(n) partition.

use rustc_hash::FxHashMap;

use crate::model::{EntityId, Snapshot};

/// All snapshots, keyed by the entity they belong to.
pub type EntityGroups = FxHashMap<EntityId, Vec<Snapshot>>;

pub fn group_by_entity<I>(snapshots: I) -> EntityGroups
where
    I: IntoIterator<Item = Snapshot>,
{
    let mut groups = EntityGroups::default();
    for snapshot in snapshots {
        groups
            .entry(snapshot.entity.clone())
            .or_default()
            .push(snapshot);
    }
    groups
}
