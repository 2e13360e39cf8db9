//! Ticket to workbook pipeline.
//!
//! Validates the request, makes the one upstream call, extracts the record
//! array, builds rows and renders the workbook. Holds no state between
//! requests.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{
    GenerateRequest, PayloadShape, TabularRow, build_rows, default_summary, extract_records,
    extract_summary, workbook_file_name,
};
use crate::services::upstream::GenerationService;
use crate::services::workbook::render_workbook;

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct GeneratedWorkbook {
    pub ticket_key: String,
    pub file_name: String,
    pub summary: String,
    /// Which upstream layout the records came from.
    pub shape: PayloadShape,
    /// Record array exactly as received.
    pub test_cases: Vec<serde_json::Value>,
    pub rows: Vec<TabularRow>,
    pub bytes: Vec<u8>,
}

/// Runs generation requests against a `GenerationService`.
#[derive(Clone)]
pub struct WorkbookGenerator {
    upstream: Arc<dyn GenerationService>,
}

impl WorkbookGenerator {
    pub fn new(upstream: Arc<dyn GenerationService>) -> Self {
        Self { upstream }
    }

    pub fn upstream(&self) -> &Arc<dyn GenerationService> {
        &self.upstream
    }

    pub async fn generate(&self, request: &GenerateRequest) -> AppResult<GeneratedWorkbook> {
        let ticket_key = request
            .ticket_key()
            .ok_or_else(|| AppError::MissingInput("jiraTicketKey is required".to_string()))?
            .to_string();

        let payload = match request.stored_id() {
            Some(id) => self.upstream.fetch_stored(id).await?,
            None => {
                self.upstream
                    .generate(&ticket_key, request.use_reasoning)
                    .await?
            }
        };

        let extracted = extract_records(&payload).ok_or_else(|| {
            warn!(ticket = %ticket_key, "No test case array in generation service response");
            AppError::MalformedUpstreamResponse(format!(
                "No test cases found for {}",
                ticket_key
            ))
        })?;

        let rows = build_rows(&extracted.records);
        let bytes = render_workbook(&rows)?;

        info!(
            ticket = %ticket_key,
            shape = %extracted.shape,
            rows = rows.len(),
            bytes = bytes.len(),
            "Workbook generated"
        );

        Ok(GeneratedWorkbook {
            file_name: workbook_file_name(&ticket_key),
            summary: extract_summary(&payload).unwrap_or_else(|| default_summary(&ticket_key)),
            ticket_key,
            shape: extracted.shape,
            test_cases: extracted.raw,
            rows,
            bytes,
        })
    }
}
