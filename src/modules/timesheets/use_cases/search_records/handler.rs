use crate::modules::timesheets::adapters::outbound::record_store::RecordStore;
use crate::modules::timesheets::core::fields;
use crate::modules::timesheets::core::record::TimesheetRecord;
use crate::modules::timesheets::use_cases::search_records::query::{
    SearchError, SearchQuery, is_search_field,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

pub struct SearchRecordsHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SearchRecordsHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Runs one store lookup per criterion and intersects the results.
    ///
    /// `Ok(None)` means the query had no criteria at all, which is not the
    /// same as `Ok(Some(empty))`: criteria were given and nothing matched.
    /// Every criterion is checked before the store is read, so a bad one
    /// fails the whole query.
    pub async fn handle(
        &self,
        query: &SearchQuery,
    ) -> Result<Option<HashSet<TimesheetRecord>>, SearchError> {
        if !query.has_criteria() {
            info!("search records: no criteria given");
            return Ok(None);
        }
        let range = query.range();
        for (field, _) in query.criteria() {
            let accessor = fields::resolve(field)?;
            if !is_search_field(accessor.name()) {
                return Err(SearchError::InvalidQuery(format!(
                    "{field} is not a searchable field"
                )));
            }
        }

        let mut result: Option<HashSet<TimesheetRecord>> = None;
        for (field, value) in query.criteria() {
            let hits = self.store.find_by_field(field, value, range).await?;
            result = Some(match result {
                None => {
                    debug!(field, value, hits = hits.len(), "starting result set");
                    hits
                }
                Some(mut current) => {
                    current.retain(|record| hits.contains(record));
                    debug!(field, value, remaining = current.len(), "intersected result set");
                    current
                }
            });
        }

        info!(
            criteria = query.criteria().len(),
            found = result.as_ref().map(HashSet::len),
            "search records"
        );
        Ok(result)
    }
}
