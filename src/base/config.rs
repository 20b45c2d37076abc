//! Load configuration via `config` crate with env-override support.

use std::{net::SocketAddr, ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::{Res, Void};

/// Default address the webhook server binds to.
fn default_listen_address() -> String {
    "0.0.0.0:8000".to_string()
}

/// Default base URL of the LINE Messaging API.
fn default_api_base_url() -> String {
    "https://api.line.me".to_string()
}

/// Configuration for the trip-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared configuration values.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Configuration values, as deserialized from the environment or a file.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// LINE channel secret used to verify webhook signatures (`LINE_CHANNEL_SECRET`).
    #[serde(default)]
    pub channel_secret: String,
    /// LINE channel access token used to send replies (`LINE_CHANNEL_TOKEN`).
    #[serde(default)]
    pub channel_token: String,
    /// Address the webhook server listens on (`LINE_LISTEN_ADDRESS`).
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    /// Base URL of the LINE Messaging API (`LINE_API_BASE_URL`).
    ///
    /// Only worth overriding when pointing the bot at a local stand-in.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            channel_secret: String::new(),
            channel_token: String::new(),
            listen_address: default_listen_address(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    /// Wrap already-built values.
    pub fn new(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Load from `LINE_*` environment variables, plus an optional TOML file.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("LINE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config::new(cfg.build()?.try_deserialize()?);

        result.validate()?;

        Ok(result)
    }

    /// Check the invariants the rest of the bot relies on.
    pub fn validate(&self) -> Void {
        if self.channel_secret.trim().is_empty() || self.channel_token.trim().is_empty() {
            return Err(anyhow::anyhow!("Missing LINE_CHANNEL_SECRET or LINE_CHANNEL_TOKEN."));
        }

        if self.listen_address.parse::<SocketAddr>().is_err() {
            return Err(anyhow::anyhow!("Listen address `{}` is not a valid socket address.", self.listen_address));
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("API base URL must start with `http://` or `https://`."));
        }

        Ok(())
    }
}
