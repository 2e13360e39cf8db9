//! Request and response DTOs for spreadsheet generation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /api/generate-excel`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Jira ticket key (e.g. "VO-20249"). Names the downloaded file.
    #[serde(default)]
    pub jira_ticket_key: Option<String>,
    /// Ask the generator for slower, more detailed reasoning.
    #[serde(default)]
    pub use_reasoning: bool,
    /// Id of a previously generated result; skips generation when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GenerateRequest {
    pub fn new(ticket_key: impl Into<String>, use_reasoning: bool) -> Self {
        Self {
            jira_ticket_key: Some(ticket_key.into()),
            use_reasoning,
            id: None,
        }
    }

    /// Ticket key with surrounding whitespace removed, `None` when blank.
    pub fn ticket_key(&self) -> Option<&str> {
        self.jira_ticket_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Stored result id, `None` when blank.
    pub fn stored_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// Response encoding for the generated workbook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Raw XLSX bytes as an attachment.
    #[default]
    Xlsx,
    /// JSON envelope with the workbook base64-encoded.
    Json,
}

/// Query parameters of `POST /api/generate-excel`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// `xlsx` (default) or `json`.
    #[serde(default)]
    pub format: ResponseFormat,
}

/// JSON envelope returned when `format=json`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    pub ticket_id: String,
    pub summary: String,
    /// Record array exactly as returned by the generation service.
    #[schema(value_type = Vec<Object>)]
    pub test_cases: Vec<JsonValue>,
    /// Base64-encoded XLSX workbook.
    pub excel_file: String,
    pub file_name: String,
}

/// Download name for a ticket's workbook.
///
/// Characters that are unsafe inside a quoted `Content-Disposition`
/// filename are replaced with `_`.
pub fn workbook_file_name(ticket_key: &str) -> String {
    let safe: String = ticket_key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("SIT_{}.xlsx", safe)
}

/// Summary used when the upstream supplies none.
pub fn default_summary(ticket_key: &str) -> String {
    format!("SIT Test Cases for {}", ticket_key)
}
