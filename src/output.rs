//! Result rendering.

use crate::error::Result;
use crate::record::Record;
use std::io::Write;

/// Writes each record's id on its own line, in the order given.
///
/// Ids are separated by a single newline and the output ends with exactly
/// one trailing newline. An empty result writes nothing.
pub fn write_ids<'a, I, W>(records: I, mut writer: W) -> Result<()>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write,
{
    let mut written = 0usize;
    for record in records {
        if written > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(record.id.as_bytes())?;
        written += 1;
    }

    if written > 0 {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
