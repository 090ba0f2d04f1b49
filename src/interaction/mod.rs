//! Event handling and user interactions for siggi-bot.
//!
//! This module provides the platform-independent side of the bot:
//! - The static command registry and dispatch
//! - The `/siggi` and `/chickensoup` handlers
//! - Lifecycle hooks such as the "ready" event
//! - Per-invocation reply tracking

pub mod chickensoup;
pub mod lifecycle;
pub mod registry;
pub mod reply;
pub mod siggi;
