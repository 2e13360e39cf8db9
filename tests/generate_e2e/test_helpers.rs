//! Shared helpers for generation E2E tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use calamine::{Reader, Xlsx, open_workbook_from_rs};
use serde_json::Value;
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use sit_bff_lib::config::UpstreamSettings;
use sit_bff_lib::services::{HttpGenerationService, SHEET_NAME, WorkbookGenerator};

/// Create a test BFF app talking to the upstream at `base_url`.
pub async fn create_test_app(
    base_url: &str,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    let settings = UpstreamSettings::new(base_url, Duration::from_secs(10));
    let upstream = HttpGenerationService::new(&settings).expect("failed to build upstream client");

    test::init_service(
        App::new()
            .app_data(web::Data::new(WorkbookGenerator::new(Arc::new(upstream))))
            .service(
                web::scope("/api")
                    .configure(sit_bff_lib::api::configure_generate_routes)
                    .configure(sit_bff_lib::api::configure_history_routes),
            ),
    )
    .await
}

/// Raw response of `POST /api/generate-excel`.
pub struct GenerateResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl GenerateResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

/// POST a generation request. `format` is appended as a query parameter.
pub async fn post_generate<S>(app: &S, body: Value, format: Option<&str>) -> GenerateResponse
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let uri = match format {
        Some(f) => format!("/api/generate-excel?format={}", f),
        None => "/api/generate-excel".to_string(),
    };
    let req = test::TestRequest::post().uri(&uri).set_json(body).to_request();

    let resp = test::call_service(app, req).await;
    let header = |name: actix_web::http::header::HeaderName| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let status = resp.status().as_u16();
    let content_type = header(actix_web::http::header::CONTENT_TYPE);
    let content_disposition = header(actix_web::http::header::CONTENT_DISPOSITION);
    let body = test::read_body(resp).await.to_vec();

    GenerateResponse {
        status,
        content_type,
        content_disposition,
        body,
    }
}

/// Read the test case sheet back as rows of display strings.
pub fn read_sheet(bytes: &[u8]) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes.to_vec())).expect("not a valid xlsx file");

    assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);

    let range = workbook
        .worksheet_range(SHEET_NAME)
        .expect("test case sheet missing");
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

pub fn header_row() -> Vec<String> {
    [
        "Sr.No",
        "Testcase_ID",
        "TEST",
        "Expected Result",
        "Actual Result",
        "Status",
        "Type",
    ]
    .map(String::from)
    .to_vec()
}

pub fn row(cells: [&str; 7]) -> Vec<String> {
    cells.map(String::from).to_vec()
}
