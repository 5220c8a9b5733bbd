//! top-records CLI
//!
//! Reads `<id> <value>` lines from a file or standard input and prints the
//! ids of the N records with the largest values.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- 10 --file records.txt
//! cat records.txt | cargo run -- 10
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use clap::Parser;
use std::io;
use std::process;
use top_records::{Cli, InputSource, Result};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let source = InputSource::open(config.file.as_deref())?;

    let stdout = io::stdout();
    let handle = io::BufWriter::new(stdout.lock());
    top_records::run(config.capacity, source, handle)
}
