// In memory implementation of the RecordStore port.
//
// Responsibilities
// - Keep records in a set keyed by structural equality.
// - Writers hold the write lock for the whole batch, readers clone matches
//   out under the read lock.

use crate::modules::timesheets::adapters::outbound::record_store::RecordStore;
use crate::modules::timesheets::core::dates::{DateRange, parse_record_date};
use crate::modules::timesheets::core::fields::{self, UnknownFieldError};
use crate::modules::timesheets::core::record::TimesheetRecord;
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashSet<TimesheetRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn within_range(record: &TimesheetRecord, range: &DateRange) -> bool {
    if !range.is_bounded() {
        return true;
    }
    match parse_record_date(record.date()) {
        Ok(date) => range.contains(date),
        Err(error) => {
            info!(date = record.date(), %error, "bad record date format, skipping record");
            false
        }
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn import(&self, candidates: Vec<TimesheetRecord>) -> usize {
        let submitted = candidates.len();
        let mut guard = self.records.write().await;
        let mut added = 0;
        for candidate in candidates {
            if guard.insert(candidate) {
                added += 1;
            }
        }
        info!(
            added,
            submitted,
            total = guard.len(),
            "imported records, duplicates dropped"
        );
        added
    }

    async fn delete(&self, target: &TimesheetRecord) -> bool {
        let removed = self.records.write().await.remove(target);
        info!(
            removed,
            first_name = target.first_name(),
            last_name = target.last_name(),
            date = target.date(),
            "delete record"
        );
        removed
    }

    async fn find_by_field(
        &self,
        field: &str,
        value: &str,
        range: DateRange,
    ) -> Result<HashSet<TimesheetRecord>, UnknownFieldError> {
        let accessor = fields::resolve(field)?;
        let wanted = value.to_lowercase();

        let guard = self.records.read().await;
        let found: HashSet<TimesheetRecord> = guard
            .iter()
            .filter(|record| accessor.matches(record, &wanted))
            .filter(|record| within_range(record, &range))
            .cloned()
            .collect();
        drop(guard);

        debug!(
            field = accessor.name(),
            value,
            start = ?range.start,
            end = ?range.end,
            found = found.len(),
            "find_by_field"
        );
        Ok(found)
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}
