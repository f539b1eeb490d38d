use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: String) -> impl IntoResponse {
    match state.import_handler.handle(&body).await {
        Ok(summary) => (
            StatusCode::OK,
            format!(
                "Thank you. We imported {} of {} records.\n",
                summary.imported, summary.submitted
            ),
        )
            .into_response(),
        Err(error) => (
            StatusCode::BAD_REQUEST,
            format!("Trouble importing: {error}\n"),
        )
            .into_response(),
    }
}
