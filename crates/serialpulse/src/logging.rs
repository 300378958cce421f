use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to `{data_dir}/serialpulse.log`.
///
/// The chart owns the terminal while the app runs, so nothing may write to
/// stdout or stderr; everything goes to the file. The log level can be
/// controlled via the `level` parameter or the `RUST_LOG` environment
/// variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("serialpulse.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("serialpulse={level},serialpulse_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "serialpulse logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}
