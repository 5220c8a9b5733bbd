//! Writes sample input for top-records.
//!
//! ```bash
//! cargo run --bin gen-records -- 1000            # writes 1000.txt
//! cargo run --bin gen-records -- 1000 --seed 42 -o sample.txt
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;
use top_records::generate::{default_output_path, write_records};
use top_records::Result;

#[derive(Parser, Debug)]
#[command(name = "gen-records", version, about = "Generate random <id> <value> records")]
struct Args {
    /// Number of records; values are drawn from 1..=count
    count: u64,

    /// Output file (defaults to <count>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<()> {
    let path = args
        .output
        .unwrap_or_else(|| default_output_path(args.count));
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let file = File::create(&path)?;
    write_records(args.count, &mut rng, BufWriter::new(file))
}
