//! API endpoint modules.

pub mod generate;
pub mod health;
pub mod history;
pub mod openapi;

pub use generate::configure_routes as configure_generate_routes;
pub use health::configure_health_routes;
pub use history::configure_routes as configure_history_routes;
pub use openapi::ApiDoc;
