//! The single pass over the input.
//!
//! Reads lines one at a time, parses each into a record and offers it to a
//! bounded selector. Nothing is written until the whole input has been read,
//! so a failure mid-stream produces no partial output.

use crate::error::Result;
use crate::order::{ByValue, RecordOrder};
use crate::output::write_ids;
use crate::record::Record;
use crate::selector::BoundedTopSelector;
use log::info;
use std::io::{BufRead, Write};

/// Selects the `capacity` largest records from `reader` and writes their ids
/// to `writer` in heap order.
///
/// The selector is built before the first read, so an invalid capacity never
/// consumes input. The first malformed line aborts the run.
pub fn run<R: BufRead, W: Write>(capacity: usize, reader: R, writer: W) -> Result<()> {
    run_with_order(capacity, ByValue, reader, writer)
}

/// Like [`run`], with an explicit ordering policy.
pub fn run_with_order<O, R, W>(capacity: usize, order: O, reader: R, writer: W) -> Result<()>
where
    O: RecordOrder,
    R: BufRead,
    W: Write,
{
    let selector = select(BoundedTopSelector::with_order(capacity, order)?, reader)?;
    write_ids(selector.snapshot(), writer)
}

/// Feeds every line of `reader` into `selector` and returns it.
pub fn select<O, R>(
    mut selector: BoundedTopSelector<O>,
    reader: R,
) -> Result<BoundedTopSelector<O>>
where
    O: RecordOrder,
    R: BufRead,
{
    let mut records_read = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = Record::parse_line(&line, idx + 1)?;
        selector.add(record);
        records_read += 1;
    }

    info!(
        "Read {} records, holding {} of {}",
        records_read,
        selector.len(),
        selector.capacity()
    );
    Ok(selector)
}
