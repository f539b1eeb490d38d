use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::timesheets::use_cases::create_record::inbound::http as create_http;
use crate::modules::timesheets::use_cases::delete_record::inbound::http as delete_http;
use crate::modules::timesheets::use_cases::import_records::inbound::http as import_http;
use crate::modules::timesheets::use_cases::search_records::inbound::http as search_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/timeEntry",
            get(search_http::handle)
                .post(create_http::handle)
                .delete(delete_http::handle),
        )
        .route("/tasks/upload", post(import_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
