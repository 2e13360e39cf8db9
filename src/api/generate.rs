//! Spreadsheet generation endpoint.

use actix_web::http::header;
use actix_web::{HttpResponse, post, web};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{GenerateQuery, GenerateRequest, GenerationResult, ResponseFormat};
use crate::services::{GeneratedWorkbook, WorkbookGenerator, XLSX_CONTENT_TYPE};

/// Generate SIT test cases for a Jira ticket and return them as Excel.
///
/// POST /api/generate-excel
///
/// With `format=xlsx` (default) the workbook is streamed as an attachment.
/// With `format=json` it is returned base64-encoded inside a JSON envelope.
#[utoipa::path(
    post,
    path = "/api/generate-excel",
    tag = "Generation",
    params(GenerateQuery),
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Excel workbook attachment, or with format=json the workbook in a JSON envelope", body = GenerationResult),
        (status = 400, description = "Missing or invalid input", body = ErrorResponse),
        (status = 502, description = "Generation service failed or answered unexpectedly", body = ErrorResponse),
        (status = 500, description = "Workbook could not be written", body = ErrorResponse)
    )
)]
#[post("/generate-excel")]
pub async fn generate_excel(
    generator: web::Data<WorkbookGenerator>,
    query: web::Query<GenerateQuery>,
    body: web::Json<GenerateRequest>,
) -> AppResult<HttpResponse> {
    let workbook = generator.generate(&body).await?;

    Ok(match query.format {
        ResponseFormat::Xlsx => attachment_response(workbook),
        ResponseFormat::Json => HttpResponse::Ok().json(envelope(workbook)),
    })
}

fn attachment_response(workbook: GeneratedWorkbook) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", workbook.file_name),
        ))
        .body(workbook.bytes)
}

fn envelope(workbook: GeneratedWorkbook) -> GenerationResult {
    GenerationResult {
        success: true,
        excel_file: STANDARD.encode(&workbook.bytes),
        ticket_id: workbook.ticket_key,
        summary: workbook.summary,
        test_cases: workbook.test_cases,
        file_name: workbook.file_name,
    }
}

/// Configure generation routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::InvalidInput(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::InvalidInput(err.to_string()).into()
    }))
    .service(generate_excel);
}
