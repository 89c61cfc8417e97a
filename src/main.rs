use clap::Parser;
use drill_analyst::config::{ConfigStore, FileConfigStore};
use drill_analyst::{export, flatten, loader, report};
use std::error::Error;
use std::path::PathBuf;

/// offline analyzer for typing drill statistics
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Reads every drill attempt from the drill_stats table, flattens the embedded per-keystroke events, prints accuracy/speed/error-pattern statistics, and exports the flattened rows as CSV."
)]
pub struct Cli {
    /// path to a JSON connection config; defaults to the platform config dir
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// where to write the flattened key event export
    #[clap(short = 'o', long, default_value = "key_events_analysis.csv")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let db_config = store.load();

    // Read phase finishes (and the connection closes) before any analysis.
    let drills = loader::load_drill_stats(&db_config)?;
    let records = flatten::flatten_events(&drills)?;

    print!("{}", report::render_report(&records));

    export::write_csv(&records, &cli.output)?;
    println!("\nData has been saved to '{}'", cli.output.display());

    Ok(())
}
