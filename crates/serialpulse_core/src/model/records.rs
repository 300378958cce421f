//! Snapshot and delta record types
//!
//! Timestamps are kept as strings throughout. The source data uses forms that
//! sort chronologically under plain string comparison ("YYYYMMDDHH" hour
//! stamps, "YYYYMMDD" day keys, or ISO dates), and every ordering and range
//! comparison in the engine relies on exactly that property.

use serde::{Deserialize, Serialize};

use crate::model::EntityId;

/// One observed point-in-time reading of an entity's cumulative counters.
///
/// The counters are assumed (not enforced) to be non-negative and
/// non-decreasing over time for a given entity; corrections or resets in the
/// source data show up downstream as negative deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub entity: EntityId,
    pub timestamp: String,
    pub views: f64,
    pub vote: f64,
    pub alarm: f64,
    pub like: f64,
}

impl Snapshot {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Views => self.views,
            Metric::Vote => self.vote,
            Metric::Alarm => self.alarm,
            Metric::Like => self.like,
        }
    }
}

/// Signed differences between two chronologically adjacent snapshots (native
/// granularity) or two adjacent daily representatives (daily granularity).
///
/// The stamping convention differs by granularity and governs axis alignment:
/// native deltas carry the earlier snapshot's timestamp (interval start),
/// daily deltas carry the later day key (interval end).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaPoint {
    pub timestamp: String,
    pub views: f64,
    pub vote: f64,
    pub alarm: f64,
    pub like: f64,
}

impl DeltaPoint {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Views => self.views,
            Metric::Vote => self.vote,
            Metric::Alarm => self.alarm,
            Metric::Like => self.like,
        }
    }
}

/// An entry from the entity-list table: identifier plus display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInfo {
    pub id: EntityId,
    pub title: String,
}

/// Which cumulative counter a query is asking about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Views,
    Vote,
    Alarm,
    Like,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Views, Metric::Vote, Metric::Alarm, Metric::Like];

    /// The column key in the snapshot table.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Views => "views",
            Metric::Vote => "vote",
            Metric::Alarm => "alarm",
            Metric::Like => "like",
        }
    }

    /// Human-readable label for chart legends and titles.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Views => "Views",
            Metric::Vote => "Votes",
            Metric::Alarm => "Alarms",
            Metric::Like => "Likes",
        }
    }

    /// The next metric in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Metric::Views => Metric::Vote,
            Metric::Vote => Metric::Alarm,
            Metric::Alarm => Metric::Like,
            Metric::Like => Metric::Views,
        }
    }
}

/// Delta granularity: every snapshot pair, or one representative per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Native,
    Daily,
}

impl Granularity {
    pub fn toggle(self) -> Self {
        match self {
            Granularity::Native => Granularity::Daily,
            Granularity::Daily => Granularity::Native,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Native => "native",
            Granularity::Daily => "daily",
        }
    }
}
