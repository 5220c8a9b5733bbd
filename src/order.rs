//! Ordering policies used by the selector.
//!
//! `Record` deliberately has no `Ord` impl: what "larger" means is a policy
//! handed to the selector, so it can be tested and swapped on its own.

use crate::record::Record;

/// A strict weak ordering over records.
pub trait RecordOrder {
    /// Returns `true` if `a` ranks strictly below `b`.
    fn less(&self, a: &Record, b: &Record) -> bool;
}

/// Ranks by `value` only. Records with equal values are equivalent, so the
/// survivor among ties depends on arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl RecordOrder for ByValue {
    fn less(&self, a: &Record, b: &Record) -> bool {
        a.value < b.value
    }
}

/// Ranks by `value`, then by `id` (lexicographically). Survivors no longer
/// depend on arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValueThenId;

impl RecordOrder for ByValueThenId {
    fn less(&self, a: &Record, b: &Record) -> bool {
        (a.value, &a.id) < (b.value, &b.id)
    }
}

impl<F> RecordOrder for F
where
    F: Fn(&Record, &Record) -> bool,
{
    fn less(&self, a: &Record, b: &Record) -> bool {
        self(a, b)
    }
}
