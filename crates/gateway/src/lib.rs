//! HTTP API gateway for Planeslore.
//!
//! Exposes the lore lookup endpoint and a liveness check:
//!
//! - `POST /api/lore` — validate a character name, delegate to the lore
//!   client, map each failure class to its HTTP outcome
//! - `GET  /health`   — fixed "ok" status for deployment health checks
//!
//! Built on Axum. State is immutable after startup: the config and the lore
//! client are constructed once and shared via `Arc`; requests hold no locks
//! and share no mutable state.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use planeslore_config::AppConfig;
use planeslore_core::error::LoreError;
use planeslore_core::lore::LoreRecord;
use planeslore_provider::LoreClient;

/// User-facing error messages. Internal detail is logged, never returned.
const MSG_EMPTY_NAME: &str = "Character name is required and must be a non-empty string";
const MSG_NOT_CONFIGURED: &str = "OpenAI API key is not configured on the server";
const MSG_SHAPE_INVALID: &str = "Received invalid data format from AI service";
const MSG_PARSE_FAILURE: &str = "Failed to parse AI response as JSON";
const MSG_GENERIC: &str = "Failed to fetch character lore. Please try again.";

/// Shared application state for the gateway.
pub struct GatewayState {
    pub config: AppConfig,
    /// `None` when no credential is configured — requests then fail with the
    /// misconfiguration outcome before any outbound call is attempted.
    pub lore: Option<Arc<LoreClient>>,
}

type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/api/lore", post(lore_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1 MB body limit
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let lore = match planeslore_provider::build_from_config(&config) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!(error = %e, "Lore client not built — lookups will report misconfiguration");
            None
        }
    };

    let state = Arc::new(GatewayState { config, lore });
    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn lore_handler(
    State(state): State<SharedState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<LoreRecord>, (StatusCode, Json<ErrorResponse>)> {
    // Input constraint: a string, non-empty after trimming. The body is taken
    // as a raw JSON value so a missing, null, or wrong-typed `characterName`
    // all land here as the 400 outcome instead of an extractor rejection, and
    // invalid input never reaches the provider.
    let name = match payload
        .get("characterName")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
    {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            warn!("Lore request rejected: missing or empty character name");
            return Err(error_response(StatusCode::BAD_REQUEST, MSG_EMPTY_NAME));
        }
    };

    // Credential precondition: fail before any outbound call is attempted.
    let Some(lore) = state.lore.as_ref() else {
        error!("Lore request failed: no API key configured");
        return Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            MSG_NOT_CONFIGURED,
        ));
    };

    match lore.fetch(&name).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            error!(character = %name, error = %e, "Lore lookup failed");
            let message = match e {
                LoreError::ShapeInvalid(_) => MSG_SHAPE_INVALID,
                LoreError::ParseFailure(_) => MSG_PARSE_FAILURE,
                LoreError::Provider(_) => MSG_GENERIC,
            };
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, message))
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
