//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SIT Test Case BFF",
        version = "0.1.0",
        description = "Generates SIT test cases for Jira tickets and returns them as Excel workbooks"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::generate::generate_excel,
        api::history::list_history,
    ),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            models::GenerateRequest,
            models::ResponseFormat,
            models::GenerationResult,
            models::TicketHistory,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Generation", description = "Test case generation and Excel export"),
        (name = "History", description = "Previously generated tickets")
    )
)]
pub struct ApiDoc;
