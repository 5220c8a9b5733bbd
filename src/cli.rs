//! Command-line arguments.

use crate::error::{Result, TopError};
use clap::Parser;
use std::path::PathBuf;

/// Report the ids of the records with the largest values.
///
/// Each input line is `<id> <value>`, where `value` is a base-10 integer.
#[derive(Parser, Debug)]
#[command(name = "top-records", version, about)]
pub struct Cli {
    /// Number of largest values to report
    #[arg(allow_negative_numbers = true)]
    pub x_largest: i64,

    /// Path to an input file; standard input is read if omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many records to keep
    pub capacity: usize,

    /// Input file, or `None` for standard input
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Checks the parsed arguments and turns them into a [`Config`].
    ///
    /// Fails with [`TopError::InvalidArgument`] if `x_largest` is not positive.
    pub fn into_config(self) -> Result<Config> {
        let capacity = usize::try_from(self.x_largest)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                TopError::InvalidArgument(format!(
                    "record count must be a positive integer, got {}",
                    self.x_largest
                ))
            })?;

        Ok(Config {
            capacity,
            file: self.file,
        })
    }
}
