//! Record model and line parsing.

use crate::error::{Result, TopError};
use std::fmt;
use std::str::FromStr;

/// One input line: an opaque identifier and the value it is ranked by.
///
/// The `id` is kept exactly as read (zero padding included) and is never
/// interpreted as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Opaque identifier, preserved verbatim
    pub id: String,

    /// Ranking value
    pub value: i64,
}

impl Record {
    /// Creates a record from its parts.
    pub fn new(id: impl Into<String>, value: i64) -> Self {
        Record {
            id: id.into(),
            value,
        }
    }

    /// Parses one input line, tagging failures with its 1-based line number.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        line.parse::<Record>()
            .map_err(|e| TopError::MalformedRecord {
                line: line_no,
                message: e.to_string(),
            })
    }
}

/// Why a line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRecordError {
    /// The line did not split into exactly two whitespace-separated tokens.
    FieldCount(usize),

    /// The second token is not a base-10 integer.
    InvalidValue(String),
}

impl fmt::Display for ParseRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRecordError::FieldCount(n) => write!(f, "expected 2 fields, found {}", n),
            ParseRecordError::InvalidValue(v) => write!(f, "invalid integer value {:?}", v),
        }
    }
}

impl std::error::Error for ParseRecordError {}

impl FromStr for Record {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let (id, value) = match (fields.next(), fields.next(), fields.next()) {
            (Some(id), Some(value), None) => (id, value),
            _ => return Err(ParseRecordError::FieldCount(s.split_whitespace().count())),
        };

        let value = value
            .parse::<i64>()
            .map_err(|_| ParseRecordError::InvalidValue(value.to_string()))?;

        Ok(Record::new(id, value))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.value)
    }
}
