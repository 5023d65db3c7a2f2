mod app;

use std::path::PathBuf;

use clap::Parser;

use moodscape::landscape::{GridSpec, DEFAULT_GRID_DEPTH, DEFAULT_GRID_WIDTH};

/// Moodscape - emotional news landscape (headless driver)
#[derive(Parser, Debug)]
#[command(name = "moodscape", version, about)]
struct Cli {
    /// Random seed for terrain, placement, and the synthetic newswire
    #[arg(long)]
    seed: Option<u64>,

    /// Number of batches to pull from the newswire before finishing
    #[arg(long, default_value_t = 5)]
    batches: usize,

    /// Articles per batch
    #[arg(long, default_value_t = 40)]
    batch_size: usize,

    /// Delay between batches in milliseconds (a live newswire polls at 60000)
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u32,

    /// Grid depth in cells
    #[arg(long, default_value_t = DEFAULT_GRID_DEPTH)]
    depth: u32,

    /// Export mesh and articles to file (supports .json and .json.gz)
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    println!(
        "Moodscape: seed={}, grid={}x{}, {} batch(es) of {}",
        seed, cli.width, cli.depth, cli.batches, cli.batch_size
    );

    app::run(app::RunConfig {
        seed,
        batches: cli.batches,
        batch_size: cli.batch_size,
        interval_ms: cli.interval_ms,
        grid: GridSpec::new(cli.width, cli.depth),
        export_path: cli.export,
    });
}
