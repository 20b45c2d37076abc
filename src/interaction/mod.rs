//! Event handling and user interactions for trip-bot.
//!
//! This module provides functionality for handling inbound webhooks:
//! - Validating and decoding LINE webhook bodies
//! - Matching message text against the keyword table
//! - Replying through the chat client

pub mod dispatch;
pub mod gate;
pub mod routes;
pub mod text_event;
