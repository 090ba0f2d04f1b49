//! Runtime services and shared state for the siggi-bot.

use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction::registry::CommandRegistry,
    service::chat::ChatClient,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the command registry and the chat client. It is constructed
/// once at startup and is trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The commands the bot serves.
    pub commands: CommandRegistry,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    ///
    /// Fails on an unusable configuration before any client is built.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Never connect with an unusable configuration.
        config.validate()?;

        let commands = CommandRegistry::standard()?;

        // Initialize the discord client.
        let chat = ChatClient::discord(&config, commands.clone());

        Ok(Self { commands, chat })
    }

    pub async fn start(&self) -> Void {
        let names = self.commands.definitions().iter().map(|c| c.name).collect::<Vec<_>>();
        info!("Serving commands: {}", names.join(", "));

        self.chat.start().await
    }
}
