//! Client for the external test case generation service.
//!
//! Every call is a single attempt. Transport errors and non-2xx statuses
//! surface as `AppError::UpstreamFailure` with the upstream status and body
//! kept verbatim; bodies that are not JSON surface as
//! `AppError::MalformedUpstreamResponse`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::config::UpstreamSettings;
use crate::error::{AppError, AppResult};

/// HTTP connect timeout for upstream calls.
const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest upstream error body echoed back to the client.
const MAX_ERROR_BODY_CHARS: usize = 2048;

/// Operations offered by the generation service.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate test cases for a ticket.
    async fn generate(&self, ticket_key: &str, use_reasoning: bool) -> AppResult<JsonValue>;

    /// Fetch a previously generated result by id.
    async fn fetch_stored(&self, id: &str) -> AppResult<JsonValue>;

    /// List previously generated tickets.
    async fn history(&self) -> AppResult<JsonValue>;
}

/// `GenerationService` over HTTP.
#[derive(Clone)]
pub struct HttpGenerationService {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpGenerationService {
    pub fn new(settings: &UpstreamSettings) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AppError::UpstreamFailure(format!("failed to build HTTP client: {}", e)))?;

        info!(
            "Generation service client initialized (base_url={}, timeout={}s)",
            settings.base_url,
            settings.timeout.as_secs()
        );

        Ok(Self {
            base_url: settings.base_url.clone(),
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check the status and decode the body as JSON.
    async fn read_json(response: reqwest::Response, url: &str) -> AppResult<JsonValue> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Generation service returned error status");
            return Err(AppError::UpstreamFailure(format!(
                "{} returned {}: {}",
                url,
                status,
                truncate(&body, MAX_ERROR_BODY_CHARS)
            )));
        }

        debug!(url = %url, bytes = body.len(), "Generation service responded");

        serde_json::from_str(&body).map_err(|e| {
            AppError::MalformedUpstreamResponse(format!("{} returned invalid JSON: {}", url, e))
        })
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn generate(&self, ticket_key: &str, use_reasoning: bool) -> AppResult<JsonValue> {
        let url = self.url("/api/generate-testcases");
        info!(ticket = %ticket_key, use_reasoning, "Requesting test case generation");

        let response = self
            .http_client
            .post(&url)
            .json(&serde_json::json!({
                "jiraTicketKey": ticket_key,
                "useReasoning": use_reasoning,
            }))
            .send()
            .await?;

        Self::read_json(response, &url).await
    }

    async fn fetch_stored(&self, id: &str) -> AppResult<JsonValue> {
        let url = self.url(&format!("/api/testcases/{}", urlencoding::encode(id)));
        info!(id = %id, "Fetching stored test cases");

        let response = self.http_client.get(&url).send().await?;
        Self::read_json(response, &url).await
    }

    async fn history(&self) -> AppResult<JsonValue> {
        let url = self.url("/api/history");
        let response = self.http_client.get(&url).send().await?;
        Self::read_json(response, &url).await
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
