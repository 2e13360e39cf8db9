//! Generation history, proxied from the upstream service.

use actix_web::{HttpResponse, get, web};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::TicketHistory;
use crate::services::WorkbookGenerator;

/// List previously generated tickets.
///
/// GET /api/history
///
/// Entries that are not JSON objects are dropped; nothing is cached.
#[utoipa::path(
    get,
    path = "/api/history",
    tag = "History",
    responses(
        (status = 200, description = "Generated tickets, newest first as returned upstream", body = Vec<TicketHistory>),
        (status = 502, description = "Generation service failed or answered unexpectedly", body = ErrorResponse)
    )
)]
#[get("/history")]
pub async fn list_history(generator: web::Data<WorkbookGenerator>) -> AppResult<HttpResponse> {
    let payload = generator.upstream().history().await?;
    let entries = history_entries(payload)?;
    Ok(HttpResponse::Ok().json(entries))
}

/// Accept a bare array or `{ "data": [...] }`.
fn history_entries(payload: JsonValue) -> AppResult<Vec<TicketHistory>> {
    let items = match payload {
        JsonValue::Array(items) => items,
        JsonValue::Object(mut map) => match map.remove("data") {
            Some(JsonValue::Array(items)) => items,
            _ => return Err(not_a_list()),
        },
        _ => return Err(not_a_list()),
    };

    let total = items.len();
    let entries: Vec<TicketHistory> = items
        .iter()
        .filter_map(JsonValue::as_object)
        .map(TicketHistory::from_entry)
        .collect();

    if entries.len() < total {
        debug!(dropped = total - entries.len(), "Skipped non-object history entries");
    }

    Ok(entries)
}

fn not_a_list() -> AppError {
    AppError::MalformedUpstreamResponse("history response is not a list".to_string())
}

/// Configure history routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_history);
}
