pub mod line;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Reply, Void};

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the outbound half of a messaging platform: given the
/// reply token of an inbound message, send a reply back to that conversation.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Reply to the message identified by `reply_token`.
    async fn reply(&self, reply_token: &str, reply: &Reply) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
