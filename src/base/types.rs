//! Common types shared across the bot.

use serde::{Deserialize, Serialize};

/// Application error type.
pub type Err = anyhow::Error;
/// Application result type.
pub type Res<T> = Result<T, Err>;
/// Result of an operation with no output.
pub type Void = Res<()>;

/// A suggested follow-up button attached to a reply.
///
/// Tapping the button sends `text` back to the bot as a regular message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    /// Text shown on the button.
    pub label: String,
    /// Text sent when the button is tapped.
    pub text: String,
}

impl QuickReply {
    /// A button whose label is also the text it sends.
    pub fn keyword(keyword: &str) -> Self {
        Self { label: keyword.to_string(), text: keyword.to_string() }
    }
}

/// An outbound reply to a single inbound text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Message body.
    pub text: String,
    /// Follow-up buttons shown under the message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
}

impl Reply {
    /// A reply with no quick replies.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), quick_replies: Vec::new() }
    }

    /// Attach quick-reply buttons.
    pub fn with_quick_replies(mut self, quick_replies: Vec<QuickReply>) -> Self {
        self.quick_replies = quick_replies;
        self
    }
}
