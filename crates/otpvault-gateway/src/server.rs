//! The HTTP server.
//!
//! Three routes, mirroring the session state machine:
//!
//! - `GET /` — landing. Renders the codes page only when the caller proves
//!   possession of the live token via `?token=`; any other visit while a
//!   session is active is treated as an implicit re-lock and clears the
//!   store.
//! - `POST /unlock` — form-encoded password, the single unlock attempt.
//! - `GET /api/codes` — JSON codes, gated on the `X-Session-Token` header.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use otpvault_core::SecretString;
use otpvault_session::{codes, SecretStore};

use crate::error::GatewayError;
use crate::render;
use crate::Result;

/// Default gateway port.
pub const DEFAULT_PORT: u16 = 3450;

/// Session token header for API calls.
const TOKEN_HEADER: &str = "x-session-token";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port number. The server always binds loopback.
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Shared server state: the encrypted vault blob read once at startup, and
/// the one process-wide secret store.
pub struct AppState {
    /// Encrypted vault file contents. Never mutated after startup.
    vault_blob: Vec<u8>,

    /// The single lock-guarded store all handlers share.
    store: SecretStore,
}

/// The otpvault HTTP gateway.
pub struct Gateway {
    state: Arc<AppState>,
    config: GatewayConfig,
}

impl Gateway {
    /// Create a gateway serving the given encrypted vault blob.
    pub fn new(config: GatewayConfig, vault_blob: Vec<u8>) -> Self {
        Self {
            state: Arc::new(AppState {
                vault_blob,
                store: SecretStore::new(),
            }),
            config,
        }
    }

    /// Build the router. Public so tests can drive it in-process.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/unlock", post(unlock_handler))
            .route("/api/codes", get(codes_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the gateway until the process exits.
    pub async fn run(&self) -> Result<()> {
        let addr = SocketAddr::from(([127, 0, 0, 1], self.config.port));
        info!("Starting otpvault gateway on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(GatewayError::Io)?;

        axum::serve(listener, self.router())
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[derive(Deserialize)]
struct IndexParams {
    #[serde(default)]
    token: String,
}

#[derive(Deserialize)]
struct UnlockForm {
    #[serde(default)]
    password: SecretString,
}

/// Landing page.
///
/// Without a matching token this always clears the store, even when a
/// session is otherwise live — a bare refresh or a stale tab forces
/// re-entry of the password rather than silently re-displaying codes.
async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IndexParams>,
) -> Html<String> {
    if state.store.validate_token(&params.token).await {
        let codes = codes::generate(state.store.accounts().await).await;
        return Html(render::codes_page(&codes, &params.token));
    }

    state.store.clear().await;
    Html(render::unlock_page(None))
}

/// Unlock attempt.
///
/// Every failure renders the same generic message; which step failed is
/// logged server-side by the session crate and never surfaced here.
async fn unlock_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UnlockForm>,
) -> Html<String> {
    match otpvault_session::unlock(&state.vault_blob, &form.password, &state.store).await {
        Ok(token) => {
            let codes = codes::generate(state.store.accounts().await).await;
            Html(render::codes_page(&codes, &token))
        }
        Err(e) => Html(render::unlock_page(Some(e.public_message()))),
    }
}

/// JSON codes endpoint for the auto-refresh script.
///
/// Unauthorized responses carry no body detail.
async fn codes_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let candidate = headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !state.store.validate_token(candidate).await {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let codes = codes::generate(state.store.accounts().await).await;
    Json(codes).into_response()
}
