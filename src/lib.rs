//! Library root for `trip-bot`.
//!
//! Trip-bot is a LINE webhook bot for Japan trip planning designed to:
//! - Verify and decode inbound LINE webhooks
//! - Match message text against a fixed, ordered keyword table
//! - Reply with canned itineraries and travel tips, with quick-reply buttons
//!
//! The bot integrates with LINE for chat. The outbound side sits behind a
//! trait so that tests can swap in a mock.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the trip-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with the chat client
/// - Serves the webhook until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting trip-bot ...");

    // Start the crypto provider.
    crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install the default crypto provider."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
