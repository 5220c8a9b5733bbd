//! Sample input generation.
//!
//! Produces `count` lines of `<id> <value>`, where ids are 1-based positions
//! zero-padded to nine digits and values are drawn uniformly from
//! `1..=count`.

use crate::error::Result;
use log::info;
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;

/// Width ids are zero-padded to.
pub const ID_WIDTH: usize = 9;

/// Default output file for a run generating `count` records: `<count>.txt`.
pub fn default_output_path(count: u64) -> PathBuf {
    PathBuf::from(format!("{}.txt", count))
}

/// Writes `count` random records to `writer`, one per line.
pub fn write_records<R, W>(count: u64, rng: &mut R, mut writer: W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    for i in 1..=count {
        let value = rng.random_range(1..=count);
        writeln!(writer, "{:0width$} {}", i, value, width = ID_WIDTH)?;
    }
    writer.flush()?;

    info!("Generated {} records", count);
    Ok(())
}
