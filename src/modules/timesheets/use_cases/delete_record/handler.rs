use crate::modules::timesheets::adapters::outbound::record_store::RecordStore;
use crate::modules::timesheets::core::record::TimesheetRecord;
use std::sync::Arc;
use tracing::info;

pub struct DeleteRecordHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteRecordHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Removes the stored record equal to `record`. False when none was found.
    pub async fn handle(&self, record: &TimesheetRecord) -> bool {
        let removed = self.store.delete(record).await;
        info!(removed, "delete record");
        removed
    }
}
