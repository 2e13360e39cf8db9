//! E2E tests: history proxy.

use actix_web::test;
use serde_json::{Value, json};

use super::mock_upstream::{CannedResponse, MockUpstream};
use super::test_helpers::*;

const HISTORY_PATH: &str = "/api/history";

#[actix_rt::test]
async fn test_history_passed_through() {
    let mock = MockUpstream::start();
    mock.on(
        HISTORY_PATH,
        CannedResponse::json(json!([
            {
                "_id": "h1",
                "ticketId": "VO-1",
                "summary": "Login flow",
                "generatedAt": "2026-10-01T09:00:00Z",
                "downloadUrl": "/files/SIT_VO-1.xlsx",
            },
            {"ticketId": "VO-2"},
        ])),
    );
    let app = create_test_app(&mock.base_url).await;

    let req = test::TestRequest::get().uri("/api/history").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([
            {
                "id": "h1",
                "ticketId": "VO-1",
                "summary": "Login flow",
                "generatedAt": "2026-10-01T09:00:00Z",
                "downloadUrl": "/files/SIT_VO-1.xlsx",
            },
            {"ticketId": "VO-2"},
        ])
    );

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
}

#[actix_rt::test]
async fn test_history_upstream_failure() {
    let mock = MockUpstream::start();
    mock.on(HISTORY_PATH, CannedResponse::text(503, "maintenance"));
    let app = create_test_app(&mock.base_url).await;

    let req = test::TestRequest::get().uri("/api/history").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UPSTREAM_FAILURE");
}
