//! Generation history entries as listed by the upstream service.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

/// Field aliases, canonical name first; the first usable value wins.
const ID_FIELDS: &[&str] = &["id", "_id"];
const TICKET_FIELDS: &[&str] = &["ticketId", "jiraTicketKey"];
const SUMMARY_FIELDS: &[&str] = &["summary"];
const GENERATED_AT_FIELDS: &[&str] = &["generatedAt", "createdAt"];
const DOWNLOAD_URL_FIELDS: &[&str] = &["downloadUrl"];

/// One previously generated ticket.
///
/// Every field is optional: the history list is display data and a missing
/// column must not hide the rest of the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketHistory {
    /// Upstream identifier; numeric ids are rendered as text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// RFC 3339 timestamp, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl TicketHistory {
    /// Read an upstream entry. Unknown keys are ignored and values of the
    /// wrong type count as missing, so this never fails.
    pub fn from_entry(entry: &Map<String, JsonValue>) -> Self {
        Self {
            id: first_of(entry, ID_FIELDS),
            ticket_id: first_of(entry, TICKET_FIELDS),
            summary: first_of(entry, SUMMARY_FIELDS),
            generated_at: first_of(entry, GENERATED_AT_FIELDS),
            download_url: first_of(entry, DOWNLOAD_URL_FIELDS),
        }
    }
}

fn first_of(entry: &Map<String, JsonValue>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| entry.get(*key))
        .find_map(|value| match value {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        })
}
