//! LINE Messaging API implementation of the chat client.

use async_trait::async_trait;
use serde::Serialize;

use crate::prelude::*;

use super::{ChatClient, GenericChatClient};

/// LINE caps quick-reply buttons at 13 per message.
const MAX_QUICK_REPLY_ITEMS: usize = 13;

/// LINE caps quick-reply labels at 20 characters.
const MAX_QUICK_REPLY_LABEL: usize = 20;

// Wire types.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<TextMessage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    message_type: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    quick_reply: Option<QuickReplyBlock>,
}

#[derive(Debug, Serialize)]
struct QuickReplyBlock {
    items: Vec<QuickReplyItem>,
}

#[derive(Debug, Serialize)]
struct QuickReplyItem {
    #[serde(rename = "type")]
    item_type: &'static str,
    action: MessageAction,
}

#[derive(Debug, Serialize)]
struct MessageAction {
    #[serde(rename = "type")]
    action_type: &'static str,
    label: String,
    text: String,
}

impl From<&QuickReply> for QuickReplyItem {
    fn from(quick_reply: &QuickReply) -> Self {
        Self {
            item_type: "action",
            action: MessageAction {
                action_type: "message",
                label: quick_reply.label.chars().take(MAX_QUICK_REPLY_LABEL).collect(),
                text: quick_reply.text.clone(),
            },
        }
    }
}

impl<'a> ReplyRequest<'a> {
    fn new(reply_token: &'a str, reply: &'a Reply) -> Self {
        let quick_reply = (!reply.quick_replies.is_empty()).then(|| QuickReplyBlock {
            items: reply.quick_replies.iter().take(MAX_QUICK_REPLY_ITEMS).map(QuickReplyItem::from).collect(),
        });

        Self {
            reply_token,
            messages: vec![TextMessage {
                message_type: "text",
                text: &reply.text,
                quick_reply,
            }],
        }
    }
}

// Client.

/// LINE chat client implementation.
#[derive(Clone)]
pub struct LineChatClient {
    client: reqwest::Client,
    channel_token: String,
    reply_url: String,
}

impl LineChatClient {
    /// Create a new LINE chat client.
    pub fn new(config: &Config) -> Res<Self> {
        let client = reqwest::Client::builder().user_agent(concat!("trip-bot/", env!("CARGO_PKG_VERSION"))).build()?;
        let reply_url = format!("{}/v2/bot/message/reply", config.api_base_url.trim_end_matches('/'));

        Ok(Self {
            client,
            channel_token: config.channel_token.clone(),
            reply_url,
        })
    }
}

impl ChatClient {
    /// Creates a new LINE chat client.
    pub fn line(config: &Config) -> Res<Self> {
        let client = LineChatClient::new(config)?;
        Ok(Self::new(std::sync::Arc::new(client)))
    }
}

#[async_trait]
impl GenericChatClient for LineChatClient {
    #[instrument(name = "LineChatClient::reply", skip(self, reply), fields(quick_replies = reply.quick_replies.len()))]
    async fn reply(&self, reply_token: &str, reply: &Reply) -> Void {
        let request = ReplyRequest::new(reply_token, reply);

        let response = self
            .client
            .post(&self.reply_url)
            .bearer_auth(&self.channel_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send reply: {}", e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("LINE reply API returned {}: {}", status, body));
        }

        debug!("Reply sent.");

        Ok(())
    }
}
