//! E2E tests: input validation and upstream failure handling.

use serde_json::json;

use super::mock_upstream::{CannedResponse, MockUpstream, unreachable_base_url};
use super::test_helpers::*;

const GENERATE_PATH: &str = "/api/generate-testcases";

/// Missing or blank ticket key → 400 and no upstream call.
#[actix_rt::test]
async fn test_missing_ticket_key() {
    let mock = MockUpstream::start();
    mock.on(GENERATE_PATH, CannedResponse::json(json!([])));
    let app = create_test_app(&mock.base_url).await;

    for body in [json!({}), json!({"jiraTicketKey": ""}), json!({"useReasoning": true})] {
        let resp = post_generate(&app, body, None).await;
        assert_eq!(resp.status, 400);
        let err = resp.json();
        assert_eq!(err["code"], "MISSING_INPUT");
        assert_eq!(err["error"], "No Jira ticket key provided");
    }

    assert!(mock.requests().is_empty(), "upstream must not be called");
}

/// Upstream error status → 502 carrying the upstream body.
#[actix_rt::test]
async fn test_upstream_error_status() {
    let mock = MockUpstream::start();
    mock.on(
        GENERATE_PATH,
        CannedResponse::text(500, "Jira ticket VO-404 not found"),
    );
    let app = create_test_app(&mock.base_url).await;

    let resp = post_generate(&app, json!({"jiraTicketKey": "VO-404"}), None).await;
    assert_eq!(resp.status, 502);

    let err = resp.json();
    assert_eq!(err["code"], "UPSTREAM_FAILURE");
    let details = err["details"].as_str().unwrap();
    assert!(details.contains("500"), "{details}");
    assert!(details.contains("Jira ticket VO-404 not found"), "{details}");
    assert_eq!(mock.requests().len(), 1, "no retry");
}

/// Connection refused → 502.
#[actix_rt::test]
async fn test_upstream_unreachable() {
    let base_url = unreachable_base_url();
    let app = create_test_app(&base_url).await;

    let resp = post_generate(&app, json!({"jiraTicketKey": "VO-1"}), None).await;
    assert_eq!(resp.status, 502);
    assert_eq!(resp.json()["code"], "UPSTREAM_FAILURE");
}

/// Non-JSON success body → 502 malformed.
#[actix_rt::test]
async fn test_upstream_non_json_body() {
    let mock = MockUpstream::start();
    mock.on(GENERATE_PATH, CannedResponse::text(200, "<html>gateway</html>"));
    let app = create_test_app(&mock.base_url).await;

    let resp = post_generate(&app, json!({"jiraTicketKey": "VO-1"}), None).await;
    assert_eq!(resp.status, 502);
    assert_eq!(resp.json()["code"], "MALFORMED_UPSTREAM_RESPONSE");
}

/// JSON without a recognizable record array → 502 malformed, no workbook.
#[actix_rt::test]
async fn test_upstream_unrecognized_shape() {
    let mock = MockUpstream::start();
    mock.on(
        GENERATE_PATH,
        CannedResponse::json(json!({"data": {"cases": [{"Test": "x"}]}})),
    );
    let app = create_test_app(&mock.base_url).await;

    for format in [None, Some("json")] {
        let resp = post_generate(&app, json!({"jiraTicketKey": "VO-3"}), format).await;
        assert_eq!(resp.status, 502);
        let err = resp.json();
        assert_eq!(err["code"], "MALFORMED_UPSTREAM_RESPONSE");
        assert_eq!(err["error"], "Failed to generate Excel");
        assert!(err["details"].as_str().unwrap().contains("VO-3"));
    }
}
