use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::records::{TimesheetRecordBuilder, csv_body};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn uploads_searches_and_deletes_timesheet_records() {
    let state = AppState::in_memory();
    let ada_early = TimesheetRecordBuilder::new().date("1/2/2023");
    let ada_late = TimesheetRecordBuilder::new().date("1/10/2023");
    let grace = TimesheetRecordBuilder::new()
        .date("1/4/2023")
        .first_name("Grace")
        .last_name("Hopper")
        .department("");
    let body = csv_body(&[
        ada_early.csv_line(),
        ada_late.csv_line(),
        grace.csv_line(),
        TimesheetRecordBuilder::new().date("1/2/2023").csv_line(),
    ]);

    let (status, text) = send(
        &state,
        Request::post("/tasks/upload").body(Body::from(body)).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(text).unwrap(),
        "Thank you. We imported 3 of 4 records.\n"
    );

    let (status, bytes) = send(
        &state,
        Request::get("/timeEntry?client=Acme&lastName=lovelace&start=2023-01-01&end=2023-01-05")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let found: Vec<serde_json::Value> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["date"], "1/2/2023");

    let grace = grace.build();
    let (status, _) = send(
        &state,
        Request::delete("/timeEntry")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&grace).unwrap()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, bytes) = send(
        &state,
        Request::get("/timeEntry?firstName=Grace")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"[]");
    assert_eq!(state.records.count().await, 2);
}

#[tokio::test]
async fn rejects_a_malformed_upload_without_touching_the_store() {
    let state = AppState::in_memory();
    let line = TimesheetRecordBuilder::new().csv_line();
    let short = line.rsplit_once(',').unwrap().0.to_string();

    let (status, _) = send(
        &state,
        Request::post("/tasks/upload")
            .body(Body::from(csv_body(&[short])))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.records.count().await, 0);
}
