//! Dataset loading
//!
//! The two source tables are independent, so they are read and parsed on
//! separate threads and joined before the app starts. The pipeline never
//! runs against a half-loaded dataset.

use std::path::Path;
use std::thread;

use color_eyre::eyre::{WrapErr, eyre};
use serialpulse_core::model::{EntityInfo, Snapshot};
use serialpulse_core::store;

pub fn load_datasets(
    list_path: &Path,
    stats_path: &Path,
) -> color_eyre::Result<(Vec<EntityInfo>, Vec<Snapshot>)> {
    thread::scope(|scope| {
        let entities = scope.spawn(|| -> color_eyre::Result<Vec<EntityInfo>> {
            let text = std::fs::read_to_string(list_path)
                .wrap_err_with(|| format!("failed to read {}", list_path.display()))?;
            Ok(store::parse_entities(&text)?)
        });
        let snapshots = scope.spawn(|| -> color_eyre::Result<Vec<Snapshot>> {
            let text = std::fs::read_to_string(stats_path)
                .wrap_err_with(|| format!("failed to read {}", stats_path.display()))?;
            Ok(store::parse_snapshots(&text)?)
        });

        let entities = entities
            .join()
            .map_err(|_| eyre!("entity-list loader panicked"))??;
        let snapshots = snapshots
            .join()
            .map_err(|_| eyre!("snapshot loader panicked"))??;
        Ok((entities, snapshots))
    })
}
