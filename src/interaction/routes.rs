//! HTTP surface of the bot.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing::{debug, instrument, warn};

use crate::{
    interaction::{
        gate::{self, GateError, InboundEvent},
        text_event,
    },
    runtime::Runtime,
};

/// Header carrying the webhook body signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Build the application router.
pub fn router(runtime: Runtime) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/favicon.ico", get(favicon))
        .route("/webhook", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(runtime)
}

/// GET / returns a static status payload (for probes).
async fn health() -> Json<Value> {
    Json(json!({ "message": "Japan Trip Bot is running!" }))
}

async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// POST /webhook verifies the signature, then answers every text message in order.
#[instrument(skip_all)]
async fn webhook(State(runtime): State<Runtime>, headers: HeaderMap, body: Bytes) -> Result<Json<Value>, GateError> {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());

    let events = gate::parse_events(&runtime.config.channel_secret, signature, &body).inspect_err(|e| warn!("Rejected webhook: {}", e))?;

    for event in events {
        match event {
            InboundEvent::TextMessage { reply_token, text } => text_event::handle_text_event(&reply_token, &text, &runtime.chat).await,
            InboundEvent::Other { kind } => debug!("Skipping `{}` event.", kind),
        }
    }

    Ok(Json(json!({ "status": "ok" })))
}
