//! Inbound webhook validation and decoding.
//!
//! LINE signs every webhook body with `base64(HMAC-SHA256(channel_secret, body))`
//! and sends it in the `X-Line-Signature` header.

use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use tracing::debug;

type HmacSha256 = Hmac<Sha256>;

/// Errors raised while validating an inbound webhook.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Invalid signature: {0}")]
    Authentication(&'static str),
    #[error("Invalid webhook body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A decoded inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A text message that can be answered with its reply token.
    TextMessage { reply_token: String, text: String },
    /// Anything else (follows, postbacks, stickers, images, ...).
    Other { kind: String },
}

// Wire types.

#[derive(Debug, Deserialize)]
struct WebhookEnvelope {
    events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default)]
    reply_token: Option<String>,
    #[serde(default)]
    message: Option<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(rename = "type")]
    message_type: String,
    #[serde(default)]
    text: Option<String>,
}

impl From<RawEvent> for InboundEvent {
    fn from(event: RawEvent) -> Self {
        let RawEvent { event_type, reply_token, message } = event;

        match (reply_token, message) {
            (Some(reply_token), Some(message)) if event_type == "message" && message.message_type == "text" => InboundEvent::TextMessage {
                reply_token,
                text: message.text.unwrap_or_default(),
            },
            (_, Some(message)) if event_type == "message" => InboundEvent::Other {
                kind: format!("message:{}", message.message_type),
            },
            _ => InboundEvent::Other { kind: event_type },
        }
    }
}

/// Compute the signature header value LINE would send for `body`.
pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Verify a signature header value against `body`.
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> Result<(), GateError> {
    let provided = STANDARD.decode(signature.trim()).map_err(|_| GateError::Authentication("signature is not valid base64"))?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    mac.verify_slice(&provided).map_err(|_| GateError::Authentication("signature does not match body"))
}

/// Validate and decode a webhook body.
///
/// Events are returned in the order they were received.
pub fn parse_events(secret: &str, signature: Option<&str>, body: &[u8]) -> Result<Vec<InboundEvent>, GateError> {
    let signature = signature.ok_or(GateError::Authentication("missing signature header"))?;

    verify_signature(secret, body, signature)?;

    let envelope: WebhookEnvelope = serde_json::from_slice(body)?;

    debug!("Decoded {} webhook events.", envelope.events.len());

    Ok(envelope.events.into_iter().map(InboundEvent::from).collect())
}
