use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use tracing::warn;

use crate::modules::timesheets::core::record::TimesheetRecord;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<TimesheetRecord>, JsonRejection>,
) -> impl IntoResponse {
    let Json(record) = match body {
        Ok(b) => b,
        Err(rejection) => {
            warn!(error = %rejection, "delete record: invalid entity");
            return (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()).into_response();
        }
    };

    if state.delete_handler.handle(&record).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
