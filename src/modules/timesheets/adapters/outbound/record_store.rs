// Port for the canonical collection of timesheet records.
//
// Invariant
// - No two structurally equal records are ever stored at the same time.
//
// Concurrency
// - Implementations must serialize import and delete, and give find_by_field
//   a consistent snapshot of the collection as it was when the call started.

use crate::modules::timesheets::core::dates::DateRange;
use crate::modules::timesheets::core::fields::UnknownFieldError;
use crate::modules::timesheets::core::record::TimesheetRecord;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Adds every candidate not already present and returns how many were new.
    /// Equal candidates within one batch are added once.
    async fn import(&self, candidates: Vec<TimesheetRecord>) -> usize;

    /// Removes the record equal to `target`. Returns whether one was removed.
    async fn delete(&self, target: &TimesheetRecord) -> bool;

    /// Records whose `field` equals `value` (both compared ignoring case),
    /// further restricted to `range` when it has a bound. Records whose date
    /// cannot be parsed are left out of range-constrained results.
    async fn find_by_field(
        &self,
        field: &str,
        value: &str,
        range: DateRange,
    ) -> Result<HashSet<TimesheetRecord>, UnknownFieldError>;

    async fn count(&self) -> usize;
}
