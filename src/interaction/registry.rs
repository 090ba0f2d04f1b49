use std::{collections::HashSet, sync::Arc};

use futures::{FutureExt, future::BoxFuture};
use tracing::{error, instrument};

use crate::{
    base::{
        config::Config,
        types::{Invocation, Res, Void},
    },
    interaction::{chickensoup, reply::InteractionReply, siggi},
    service::chat::Responder,
};

/// Ephemeral message sent for commands this process does not know about.
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Sorry, something went wrong!";

/// A command handler: consumes one invocation and sends exactly one response.
///
/// Handlers never fail; errors are reported to the user and logged inside.
pub type CommandHandler = fn(Invocation, Responder, Config) -> BoxFuture<'static, ()>;

/// Static description of a slash command.
#[derive(Clone, Copy)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: CommandHandler,
}

impl std::fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDefinition").field("name", &self.name).field("description", &self.description).finish()
    }
}

/// The fixed set of commands the bot serves.
///
/// Built once at startup and cheap to clone.
#[derive(Clone, Debug)]
pub struct CommandRegistry {
    commands: Arc<[CommandDefinition]>,
}

impl CommandRegistry {
    /// Creates a registry, rejecting duplicate command names.
    pub fn new(commands: Vec<CommandDefinition>) -> Res<Self> {
        let mut seen = HashSet::new();

        for command in &commands {
            if !seen.insert(command.name) {
                return Err(anyhow::anyhow!("Command `{}` is registered more than once.", command.name));
            }
        }

        Ok(Self { commands: commands.into() })
    }

    /// The registry of `/siggi` and `/chickensoup`.
    pub fn standard() -> Res<Self> {
        Self::new(vec![
            CommandDefinition {
                name: siggi::NAME,
                description: siggi::DESCRIPTION,
                handler: |invocation, responder, config| siggi::handle_siggi(invocation, responder, config).boxed(),
            },
            CommandDefinition {
                name: chickensoup::NAME,
                description: chickensoup::DESCRIPTION,
                handler: |invocation, responder, _| chickensoup::handle_chickensoup(invocation, responder).boxed(),
            },
        ])
    }

    pub fn definitions(&self) -> &[CommandDefinition] {
        &self.commands
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Routes an invocation to its handler.
    ///
    /// Unknown commands get an ephemeral apology and are surfaced as an error.
    #[instrument(skip_all, fields(command = %invocation.command_name))]
    pub async fn dispatch(&self, invocation: Invocation, responder: Responder, config: Config) -> Void {
        let Some(command) = self.get(&invocation.command_name) else {
            let name = invocation.command_name;

            let mut reply = InteractionReply::new(responder);
            if let Err(err) = reply.send_error(UNKNOWN_COMMAND_MESSAGE).await {
                error!("Failed to send error message to user: {}", err);
            }

            return Err(anyhow::anyhow!("Received unknown command `{}`.", name));
        };

        (command.handler)(invocation, responder, config).await;

        Ok(())
    }
}
