//! Library root for `siggi-bot`.
//!
//! Siggi-bot is a small Discord bot serving two slash commands:
//! - `/siggi` replies with a picture of Albert Einstein
//! - `/chickensoup` replies with a fixed rant about packet chicken soup
//!
//! The bot integrates with Discord through `serenity`. The command logic talks
//! to the platform only through the traits in [`service::chat`], so it can be
//! exercised against mocks.

pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;

use crate::prelude::*;

/// Public async entry for the binary crate.
///
/// Validates the configuration, builds the runtime context, and runs the chat
/// client until shutdown. A missing credential aborts before any connection
/// is attempted.
pub async fn start(config: Config) -> Void {
    info!("Starting bot...");

    // Initialize the runtime; an unusable configuration fails here.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
