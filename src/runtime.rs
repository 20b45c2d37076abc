//! Runtime services and shared state for the trip-bot.

use tracing::{info, instrument};

use crate::{
    base::{config::Config, types::Res, types::Void},
    interaction::routes,
    service::chat::ChatClient,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the chat client and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the LINE client.
        let chat = ChatClient::line(&config)?;

        Ok(Self { config, chat })
    }

    /// Serve the webhook until Ctrl-C.
    pub async fn start(&self) -> Void {
        let listener = tokio::net::TcpListener::bind(&self.config.listen_address).await?;

        info!("Listening on {} ...", listener.local_addr()?);

        axum::serve(listener, routes::router(self.clone())).with_graceful_shutdown(shutdown_signal()).await?;

        info!("Server stopped.");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received.");
}
