pub use crate::base::{
    config::Config,
    types::{QuickReply, Reply, Res, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
