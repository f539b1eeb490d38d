use crate::modules::timesheets::adapters::outbound::record_store::RecordStore;
use crate::modules::timesheets::core::record::TimesheetRecord;
use std::sync::Arc;
use tracing::info;

pub struct CreateRecordHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateRecordHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Stores `record` unless an equal one is already present. Returns
    /// whether the store grew.
    pub async fn handle(&self, record: TimesheetRecord) -> bool {
        let added = self.store.import(vec![record]).await == 1;
        if !added {
            info!("create record: equal record already stored");
        }
        added
    }
}
