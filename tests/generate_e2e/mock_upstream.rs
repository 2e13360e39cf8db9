//! Mock generation service for E2E tests.
//!
//! Serves canned responses keyed by request path and records every request
//! it receives.

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::Value;
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

/// A request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

/// Canned response.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

#[derive(Default)]
pub struct MockUpstreamState {
    pub responses: HashMap<String, CannedResponse>,
    pub requests: Vec<RecordedRequest>,
}

async fn respond(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<Arc<Mutex<MockUpstreamState>>>,
) -> HttpResponse {
    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        body: serde_json::from_slice(&body).ok(),
    });

    match state.responses.get(req.path()) {
        Some(canned) => HttpResponse::build(
            actix_web::http::StatusCode::from_u16(canned.status).unwrap(),
        )
        .content_type(canned.content_type)
        .body(canned.body.clone()),
        None => HttpResponse::NotFound().body("no canned response"),
    }
}

/// Mock generation service on an ephemeral port.
pub struct MockUpstream {
    pub base_url: String,
    state: Arc<Mutex<MockUpstreamState>>,
}

impl MockUpstream {
    /// Start the mock. The server lives until the test runtime shuts down.
    pub fn start() -> Self {
        let state = Arc::new(Mutex::new(MockUpstreamState::default()));

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let state_data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state_data.clone()))
                .default_service(web::route().to(respond))
        })
        .workers(1)
        .listen(listener)
        .expect("failed to listen")
        .disable_signals()
        .run();

        actix_rt::spawn(server);

        MockUpstream { base_url, state }
    }

    /// Answer `path` with `response` from now on.
    pub fn on(&self, path: &str, response: CannedResponse) -> &Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
