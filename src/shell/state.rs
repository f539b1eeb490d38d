use crate::modules::timesheets::adapters::outbound::record_store::RecordStore;
use crate::modules::timesheets::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use crate::modules::timesheets::use_cases::create_record::handler::CreateRecordHandler;
use crate::modules::timesheets::use_cases::delete_record::handler::DeleteRecordHandler;
use crate::modules::timesheets::use_cases::import_records::handler::ImportRecordsHandler;
use crate::modules::timesheets::use_cases::search_records::handler::SearchRecordsHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordStore>,
    pub create_handler: Arc<CreateRecordHandler<InMemoryRecordStore>>,
    pub delete_handler: Arc<DeleteRecordHandler<InMemoryRecordStore>>,
    pub import_handler: Arc<ImportRecordsHandler<InMemoryRecordStore>>,
    pub search_handler: Arc<SearchRecordsHandler<InMemoryRecordStore>>,
}

impl AppState {
    /// Every handler shares the one store.
    pub fn new(store: Arc<InMemoryRecordStore>) -> Self {
        Self {
            records: store.clone(),
            create_handler: Arc::new(CreateRecordHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteRecordHandler::new(store.clone())),
            import_handler: Arc::new(ImportRecordsHandler::new(store.clone())),
            search_handler: Arc::new(SearchRecordsHandler::new(store)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRecordStore::new()))
    }
}
