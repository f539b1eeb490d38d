use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, warn};

use crate::modules::timesheets::core::record::TimesheetRecord;
use crate::shell::state::AppState;

/// Adds one record. Answers 201 with the record even when an equal one was
/// already stored.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<TimesheetRecord>, JsonRejection>,
) -> impl IntoResponse {
    let Json(record) = match body {
        Ok(b) => b,
        Err(rejection) => {
            warn!(error = %rejection, "create record: invalid entity");
            return (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()).into_response();
        }
    };

    info!(
        first_name = record.first_name(),
        last_name = record.last_name(),
        "create record"
    );
    state.create_handler.handle(record.clone()).await;
    (StatusCode::CREATED, Json(record)).into_response()
}
