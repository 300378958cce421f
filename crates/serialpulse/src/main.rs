use clap::Parser;
use serialpulse::{App, init_logging, load_datasets};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "serialpulse")]
#[command(about = "A terminal viewer for per-novel metric deltas")]
struct Args {
    /// Path to the entity-list CSV (id, title)
    #[arg(long, default_value = "novel_list.csv")]
    list: PathBuf,

    /// Path to the snapshot CSV (id, timestamp, views, vote, alarm, like)
    #[arg(long, default_value = "novel_stats.csv")]
    stats: PathBuf,

    /// Path to the data directory for logs (default: ~/.serialpulse/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".serialpulse")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let (entities, snapshots) = load_datasets(&args.list, &args.stats)?;
    tracing::info!(
        entities = entities.len(),
        snapshots = snapshots.len(),
        "datasets loaded"
    );

    let mut app = App::new(entities, snapshots);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
