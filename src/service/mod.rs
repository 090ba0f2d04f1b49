//! Service integrations for external APIs and clients.
//!
//! The only external service is the chat platform. The module defines both the
//! generic traits and the concrete Discord implementation, allowing the
//! command logic to be tested against mocks.

pub mod chat;
