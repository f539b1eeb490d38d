use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use tracing::warn;

use crate::modules::timesheets::core::dates::DateRange;
use crate::modules::timesheets::use_cases::search_records::projection::Projection;
use crate::modules::timesheets::use_cases::search_records::query::{SEARCH_FIELDS, SearchQuery};
use crate::shell::state::AppState;

/// Format of the `start` and `end` query parameters, e.g. `2023-01-31`.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// An unparseable bound is logged and treated as absent.
fn parse_query_date(name: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    NaiveDate::parse_from_str(raw, QUERY_DATE_FORMAT)
        .inspect_err(|error| warn!(param = name, value = %raw, %error, "invalid date format, ignoring bound"))
        .ok()
}

/// Value of the first parameter named `name`, ignoring case. Later
/// repetitions of the same parameter are ignored.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Picks the recognized search fields out of the query string, matching
/// parameter names ignoring case. Anything else is not a criterion.
pub fn build_query(params: &[(String, String)]) -> SearchQuery {
    let range = DateRange::new(
        parse_query_date("start", first_param(params, "start")),
        parse_query_date("end", first_param(params, "end")),
    );
    SEARCH_FIELDS
        .iter()
        .fold(SearchQuery::new().within(range), |query, &field| {
            match first_param(params, field) {
                Some(value) => query.with_criterion(field, value),
                None => query,
            }
        })
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let query = build_query(&params);
    let projection = Projection::from_params(
        first_param(&params, "showFields"),
        first_param(&params, "removeFields"),
    );

    match state.search_handler.handle(&query).await {
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Ok(Some(records)) => match projection.apply(&records) {
            Ok(body) => Json(body).into_response(),
            Err(error) => {
                warn!(%error, "failed to serialize search results");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        Err(error) => {
            warn!(%error, "rejected search");
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
    }
}
