//! HTTP transport implementation.
//!
//! Serves the JSON chat endpoint and the HTML form UI from one axum app.
//! Both call `AgentServer::handle_query`.
//!
//! - `POST {chat_path}` - `{ "user_input": ... }` -> `{ "response": ..., "tool": ... }`
//! - `GET /` / `POST /` - the form UI
//! - `GET /health` - liveness
//! - `GET /tools` - registered tools

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{Html, IntoResponse},
    routing::get,
};
use http::StatusCode;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::message::{ChatRequest, ChatResponse};
use super::ui::{Panel, render_page};
use super::{TransportConfig, TransportError, TransportResult, config::HttpConfig};
use crate::core::AgentServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: AgentServer,
}

/// Form body posted by the UI.
#[derive(Debug, Deserialize)]
struct FormInput {
    #[serde(default)]
    user_input: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Create from TransportConfig (extracts HTTP config).
    pub fn from_transport_config(config: &TransportConfig) -> Option<Self> {
        match config {
            TransportConfig::Http(http_config) => Some(Self::new(http_config.clone())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router for `server`.
    pub fn router(&self, server: AgentServer) -> Router {
        let mut app = Router::new()
            .route(&self.config.chat_path, axum::routing::post(handle_chat))
            .route("/", get(form_page).post(handle_form))
            .route("/health", get(health_check))
            .route("/tools", get(list_tools))
            .with_state(AppState { server })
            .layer(TraceLayer::new_for_http());

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: AgentServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Chat:   POST {}", self.config.chat_path);
        info!("  → UI:     GET /");
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// JSON chat endpoint. Always answers 200; failures are in the body.
#[instrument(skip_all)]
async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    let response = match payload {
        Ok(Json(request)) => {
            ChatResponse::from_outcome(state.server.handle_query(&request.user_input).await)
        }
        Err(rejection) => {
            warn!("Rejected chat request: {}", rejection.body_text());
            ChatResponse::error(format!("Error: invalid request body: {}", rejection.body_text()))
        }
    };

    (StatusCode::OK, Json(response))
}

/// Blank form.
async fn form_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.server.name(), "", Panel::Empty))
}

/// Form submission. Blank queries re-render the form without routing.
#[instrument(skip_all)]
async fn handle_form(State(state): State<AppState>, body: String) -> Html<String> {
    let title = state.server.name();

    let input = match serde_urlencoded::from_str::<FormInput>(&body) {
        Ok(form) => form.user_input,
        Err(e) => {
            warn!("Unreadable form submission: {}", e);
            let message = format!("⚠️ Error: could not read form: {}", e);
            return Html(render_page(title, "", Panel::Invalid(&message)));
        }
    };

    let page = match state.server.handle_query(&input).await {
        Some(result) => render_page(title, &input, Panel::Routed(&result)),
        None => render_page(title, &input, Panel::Empty),
    };
    Html(page)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Registered tools and whether each is live or a placeholder.
async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "tools": state.server.list_tools()
    }))
}
