//! Fake sheet API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. `GET /` answers with whatever response is configured: a JSON
//! array of rows by default, or an error status, or a raw body. Every request
//! is counted so tests can check that the client fetched exactly once.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeSheetApi::start().await.unwrap();
//! api.serve_rows(&corpus_two()).await;
//! let source = HttpSource::new(api.base_url(), Duration::from_secs(5)).unwrap();
//! ```

use super::builders::{rows_to_json, RecipeRowBuilder};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
struct ApiState {
    status: StatusCode,
    body: String,
    hits: usize,
}

impl Default for ApiState {
    fn default() -> Self {
        Self { status: StatusCode::OK, body: "[]".to_string(), hits: 0 }
    }
}

/// Handle to the running fake sheet API server.
pub struct FakeSheetApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeSheetApi {
    /// Start the server on a random port. Returns once the server is
    /// listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/", get(sheet_rows))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT/`).
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Answer with `200 OK` and the rows as a JSON array.
    pub async fn serve_rows(&self, rows: &[RecipeRowBuilder]) {
        self.serve_raw(StatusCode::OK, rows_to_json(rows).to_string()).await;
    }

    /// Answer with an arbitrary status and body.
    pub async fn serve_raw(&self, status: StatusCode, body: impl Into<String>) {
        let mut s = self.state.lock().await;
        s.status = status;
        s.body = body.into();
    }

    /// Number of requests served so far.
    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits
    }
}

async fn sheet_rows(State(state): State<Arc<Mutex<ApiState>>>) -> impl IntoResponse {
    let mut s = state.lock().await;
    s.hits += 1;
    (
        s.status,
        [(header::CONTENT_TYPE, "application/json")],
        s.body.clone(),
    )
}
