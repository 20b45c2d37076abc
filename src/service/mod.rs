//! Service integrations for external APIs and clients.
//!
//! Each service module defines both a generic trait and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
