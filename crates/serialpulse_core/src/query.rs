//! The query value object threaded through a pipeline run
//!
//! Built once per triggering UI event (entity selection, metric change,
//! granularity toggle, range edit) and passed to every stage. The engine
//! never reads control state from anywhere else, which keeps it decoupled
//! from whatever front end drives it.

use crate::aggregate::DateRange;
use crate::model::{EntityId, Granularity, Metric};

/// Everything a single pipeline run depends on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartQuery {
    /// Entity whose series should overlay the mean; `None` means mean only.
    pub entity: Option<EntityId>,
    pub metric: Metric,
    pub granularity: Granularity,
    pub range: DateRange,
}
