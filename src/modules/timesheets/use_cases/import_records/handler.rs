use crate::modules::timesheets::adapters::outbound::record_store::RecordStore;
use crate::modules::timesheets::use_cases::import_records::csv::{MalformedRowError, parse_csv};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records newly added to the store.
    pub imported: usize,
    /// Records parsed from the submission, duplicates included.
    pub submitted: usize,
}

pub struct ImportRecordsHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ImportRecordsHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Parses `body` as CSV and imports it. A malformed body imports nothing.
    pub async fn handle(&self, body: &str) -> Result<ImportSummary, MalformedRowError> {
        let records = parse_csv(body).inspect_err(|error| {
            warn!(%error, "rejected csv upload");
        })?;
        let submitted = records.len();
        let imported = self.store.import(records).await;
        info!(imported, submitted, "csv upload imported");
        Ok(ImportSummary {
            imported,
            submitted,
        })
    }
}
