//! # top-records
//!
//! A streaming selector that reports the ids of the N records with the
//! largest values from `<id> <value>` lines.
//!
//! ## Design Principles
//!
//! - **Bounded memory**: only the N largest records seen so far are held
//! - **Streaming input**: lines are parsed and offered one at a time
//! - **Strict replacement**: a full selector evicts its minimum only for a
//!   strictly larger record, so ties keep the earlier record
//! - **Unordered output**: ids are emitted in heap order, not sorted
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! top_records::run(2, Cursor::new("001 10\n002 5\n003 8\n"), &mut output).unwrap();
//!
//! let mut ids: Vec<&str> = std::str::from_utf8(&output).unwrap().lines().collect();
//! ids.sort();
//! assert_eq!(ids, ["001", "003"]);
//! ```

pub mod cli;
pub mod error;
pub mod generate;
pub mod order;
pub mod output;
pub mod record;
pub mod runner;
pub mod selector;
pub mod source;

pub use cli::{Cli, Config};
pub use error::{Result, TopError};
pub use order::{ByValue, ByValueThenId, RecordOrder};
pub use output::write_ids;
pub use record::{ParseRecordError, Record};
pub use runner::{run, run_with_order, select};
pub use selector::BoundedTopSelector;
pub use source::InputSource;
