use tracing::Instrument;

use crate::{interaction::dispatch, prelude::*, service::chat::ChatClient};

/// Answer one inbound text message.
///
/// Failures to send the reply are logged and swallowed; they are not retried.
#[instrument(skip_all)]
pub async fn handle_text_event(reply_token: &str, text: &str, chat: &ChatClient) {
    // Process the event.
    let result = handle_text_event_internal(reply_token, text, chat).in_current_span().await;

    // Log any errors.
    if let Err(err) = &result {
        error!("Error while handling: {}", err);
    }
}

#[instrument(skip_all)]
async fn handle_text_event_internal(reply_token: &str, text: &str, chat: &ChatClient) -> Void {
    let reply = match dispatch::classify(text) {
        Some(rule) => {
            info!("Matched rule `{}`.", rule.name);
            (rule.reply)()
        }
        None => {
            info!("No rule matched, falling back.");
            dispatch::fallback(text)
        }
    };

    chat.reply(reply_token, &reply).await
}
