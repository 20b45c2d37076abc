#![cfg(test)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use mockall::{Sequence, mock, predicate::eq};
use serde_json::{Value, json};
use tower::ServiceExt;
use trip_bot::{
    base::{
        config::{Config, ConfigInner},
        replies,
        types::{Reply, Void},
    },
    interaction::{gate, routes},
    runtime::Runtime,
    service::chat::{ChatClient, GenericChatClient},
};

const SECRET: &str = "integration_secret";

// Mocks.

mock! {
    pub Chat {}

    #[async_trait]
    impl GenericChatClient for Chat {
        async fn reply(&self, reply_token: &str, reply: &Reply) -> Void;
    }
}

/// Helper function to build the router around a mocked chat client.
fn setup_router(chat: MockChat) -> Router {
    let config = Config::new(ConfigInner {
        channel_secret: SECRET.to_string(),
        channel_token: "test_token".to_string(),
        ..Default::default()
    });

    let chat = ChatClient::new(Arc::new(chat));

    routes::router(Runtime { config, chat })
}

fn text_event(reply_token: &str, text: &str) -> Value {
    json!({
        "type": "message",
        "mode": "active",
        "timestamp": 1_700_000_000_000u64,
        "replyToken": reply_token,
        "source": { "type": "user", "userId": "U0123456789" },
        "message": { "id": "100001", "type": "text", "text": text }
    })
}

fn envelope(events: Vec<Value>) -> String {
    json!({ "destination": "Ubot", "events": events }).to_string()
}

fn webhook_request(body: &str, signature: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/webhook").header("content-type", "application/json");

    if let Some(signature) = signature {
        builder = builder.header("X-Line-Signature", signature);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn signed_request(body: &str) -> Request<Body> {
    webhook_request(body, Some(&gate::sign(SECRET, body.as_bytes())))
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// Tests.

#[tokio::test]
async fn test_health_check() {
    let router = setup_router(MockChat::new());

    let response = router.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "message": "Japan Trip Bot is running!" }));
}

#[tokio::test]
async fn test_favicon_is_empty() {
    let router = setup_router(MockChat::new());

    let response = router.oneshot(Request::builder().uri("/favicon.ico").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_menu_keyword_replies_with_menu() {
    let mut chat = MockChat::new();
    chat.expect_reply()
        .withf(|token, reply| token == "reply-menu" && reply.text == replies::MENU && !reply.quick_replies.is_empty())
        .times(1)
        .returning(|_, _| Ok(()));

    let body = envelope(vec![text_event("reply-menu", "เมนู")]);
    let response = setup_router(chat).oneshot(signed_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_tokyo_keyword_replies_with_itinerary() {
    let mut chat = MockChat::new();
    chat.expect_reply()
        .with(eq("reply-tokyo"), eq(Reply::text(replies::TOKYO_5_DAYS)))
        .times(1)
        .returning(|_, _| Ok(()));

    let body = envelope(vec![text_event("reply-tokyo", "โตเกียว5วัน")]);
    let response = setup_router(chat).oneshot(signed_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unmatched_text_is_echoed() {
    let expected = format!("บอทตอบ: xyz-unmatched\n\n{}", replies::HELP);

    let mut chat = MockChat::new();
    chat.expect_reply()
        .withf(move |token, reply| token == "reply-echo" && reply.text == expected)
        .times(1)
        .returning(|_, _| Ok(()));

    let body = envelope(vec![text_event("reply-echo", "xyz-unmatched")]);
    let response = setup_router(chat).oneshot(signed_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_events_are_answered_in_order() {
    let mut seq = Sequence::new();
    let mut chat = MockChat::new();

    for (token, text) in [("r1", replies::SAKURA), ("r2", replies::WIFI), ("r3", replies::KYUSHU)] {
        chat.expect_reply()
            .withf(move |t, reply| t == token && reply.text == text)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
    }

    let body = envelope(vec![
        text_event("r1", "Sakura"),
        json!({ "type": "follow", "replyToken": "ignored-follow", "timestamp": 1 }),
        text_event("r2", "WiFi"),
        json!({ "type": "message", "replyToken": "ignored-sticker", "message": { "id": "2", "type": "sticker" } }),
        text_event("r3", "fukuoka ฟุกุโอกะ"),
    ]);

    let response = setup_router(chat).oneshot(signed_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_non_text_events_do_not_reply() {
    let mut chat = MockChat::new();
    chat.expect_reply().never();

    let body = envelope(vec![
        json!({ "type": "unfollow", "timestamp": 1 }),
        json!({ "type": "postback", "replyToken": "pb", "postback": { "data": "x" } }),
    ]);

    let response = setup_router(chat).oneshot(signed_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_reply_failure_still_acknowledges() {
    let mut chat = MockChat::new();
    chat.expect_reply().times(2).returning(|_, _| Err(anyhow::anyhow!("LINE is down")));

    let body = envelope(vec![text_event("a", "help"), text_event("b", "suica")]);
    let response = setup_router(chat).oneshot(signed_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_bad_signature_is_rejected() {
    let mut chat = MockChat::new();
    chat.expect_reply().never();

    let body = envelope(vec![text_event("r", "เมนู")]);
    let forged = gate::sign("not_the_secret", body.as_bytes());

    let response = setup_router(chat).oneshot(webhook_request(&body, Some(&forged))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(response).await["detail"].as_str().unwrap().contains("signature"));
}

#[tokio::test]
async fn test_missing_signature_is_rejected() {
    let mut chat = MockChat::new();
    chat.expect_reply().never();

    let body = envelope(vec![text_event("r", "เมนู")]);
    let response = setup_router(chat).oneshot(webhook_request(&body, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let mut chat = MockChat::new();
    chat.expect_reply().never();

    let response = setup_router(chat).oneshot(signed_request("{\"events\": \"nope\"}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_json(response).await["detail"].as_str().unwrap().contains("Invalid webhook body"));
}
