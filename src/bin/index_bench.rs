//! CLI driver for the index-vs-hash comparison experiment.
//!
//! Runs both engines over the same random workloads, prints a per-phase
//! summary, and writes the full results as CSV.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use leafchain::harness::{run_experiment, write_csv, ExperimentConfig};
use leafchain::{Result, DEFAULT_CAPACITY};

#[derive(Parser, Debug)]
#[command(
    name = "index-bench",
    about = "Compare the chained-leaf B+Tree against std::collections::HashMap"
)]
struct Args {
    /// Data sizes to run, one experiment pass per size.
    #[arg(long, value_delimiter = ',', default_values_t = vec![100usize, 500, 1000])]
    sizes: Vec<usize>,

    /// RNG seed for reproducible workloads.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Node capacity for the tree engine.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Output CSV path.
    #[arg(long, default_value = "comparison.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = ExperimentConfig {
        data_sizes: args.sizes,
        seed: args.seed,
        capacity: args.capacity,
    };

    let rows = run_experiment(&config)?;

    println!(
        "{:>10} {:>9} {:>9} {:>13} {:>9}",
        "data_size", "engine", "phase", "elapsed_us", "rss_kb"
    );
    for row in &rows {
        println!(
            "{:>10} {:>9} {:>9} {:>13} {:>9}",
            row.data_size, row.engine, row.phase, row.elapsed_us, row.process_rss_kb
        );
    }

    write_csv(&args.output, &rows)?;
    println!("wrote {} rows to {}", rows.len(), args.output.display());

    Ok(())
}
