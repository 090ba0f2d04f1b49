//! Discord integration for siggi-bot.
//!
//! This module connects the platform-independent command logic to Discord
//! through `serenity`:
//! - Running the gateway connection until shutdown
//! - Translating ready and interaction events
//! - Delivering responses and syncing slash commands

use crate::{
    base::{
        config::Config,
        types::{EmbedResponse, Invocation, ReadyInfo, Res, Response, Void},
    },
    interaction::{
        self,
        registry::{CommandDefinition, CommandRegistry},
    },
};
use async_trait::async_trait;
use serenity::all::{
    ActivityData, Command, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EventHandler, GatewayIntents, Http, Interaction, OnlineStatus, Ready,
};
use tracing::{error, info, instrument};

use std::sync::Arc;

use super::{ChatClient, GenericChatClient, GenericResponder, GenericSession, Responder};

// Extra methods on `ChatClient` applied by the discord implementation.

impl ChatClient {
    /// Creates a new Discord chat client.
    pub fn discord(config: &Config, commands: CommandRegistry) -> Self {
        let client = DiscordChatClient::new(config, commands);
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// Discord client implementation.
struct DiscordChatClient {
    config: Config,
    commands: CommandRegistry,
}

impl DiscordChatClient {
    fn new(config: &Config, commands: CommandRegistry) -> Self {
        Self { config: config.clone(), commands }
    }
}

#[async_trait]
impl GenericChatClient for DiscordChatClient {
    #[instrument(name = "DiscordChatClient::start", skip_all)]
    async fn start(&self) -> Void {
        let handler = DiscordEventHandler {
            config: self.config.clone(),
            commands: self.commands.clone(),
        };

        // Slash commands only need the guilds intent.

        let mut client = serenity::Client::builder(&self.config.discord_token, GatewayIntents::GUILDS).event_handler(handler).await?;
        let shard_manager = client.shard_manager.clone();

        info!("Connecting to Discord ...");

        // Run until the gateway gives up (e.g., the token is rejected) or Ctrl-C.

        tokio::select! {
            result = client.start() => result.map_err(|e| anyhow::anyhow!("Failed to login: {}", e))?,
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("Bot stopped by user, disconnecting ...");
                shard_manager.shutdown_all().await;
            }
        }

        Ok(())
    }
}

/// Session handle available once the gateway is ready.
struct DiscordSession {
    ctx: Context,
}

#[async_trait]
impl GenericSession for DiscordSession {
    fn set_presence(&self, activity: &str) {
        self.ctx.set_presence(Some(ActivityData::listening(activity)), OnlineStatus::Online);
    }

    async fn sync_commands(&self, commands: &[CommandDefinition]) -> Res<usize> {
        let commands = commands.iter().map(|c| CreateCommand::new(c.name).description(c.description)).collect();
        let synced = Command::set_global_commands(&self.ctx.http, commands).await?;

        Ok(synced.len())
    }
}

/// Responder bound to a single command interaction.
struct DiscordResponder {
    http: Arc<Http>,
    command: CommandInteraction,
}

#[async_trait]
impl GenericResponder for DiscordResponder {
    async fn defer(&self) -> Void {
        self.command.defer(&*self.http).await.map_err(|e| anyhow::anyhow!("Failed to defer interaction: {}", e))
    }

    async fn reply(&self, response: &Response) -> Void {
        let response = CreateInteractionResponse::Message(build_message(response));

        self.command.create_response(&*self.http, response).await.map_err(|e| anyhow::anyhow!("Failed to send response: {}", e))
    }

    async fn follow_up(&self, response: &Response) -> Void {
        let _ = self
            .command
            .create_followup(&*self.http, build_followup(response))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send follow-up: {}", e))?;

        Ok(())
    }
}

// Event handler for the gateway.

struct DiscordEventHandler {
    config: Config,
    commands: CommandRegistry,
}

#[async_trait]
impl EventHandler for DiscordEventHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let info = ReadyInfo {
            user_tag: ready.user.tag(),
            guild_count: ready.guilds.len(),
        };

        let session = DiscordSession { ctx };

        interaction::lifecycle::handle_ready(&info, &session, &self.config, &self.commands).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let invocation = build_invocation(&ctx, &command);
        let responder = Responder::new(Arc::new(DiscordResponder { http: ctx.http.clone(), command }));

        if let Err(err) = self.commands.dispatch(invocation, responder, self.config.clone()).await {
            error!("Command error: {}", err);
        }
    }
}

// Conversions.

fn build_invocation(ctx: &Context, command: &CommandInteraction) -> Invocation {
    Invocation {
        command_name: command.data.name.clone(),
        user_id: command.user.id.get(),
        user_name: command.user.display_name().to_string(),
        user_tag: command.user.tag(),
        guild_id: command.guild_id.map(|id| id.get()),
        guild_name: command.guild_id.and_then(|id| id.name(&ctx.cache)),
        channel_id: command.channel_id.get(),
    }
}

fn build_embed(embed: &EmbedResponse) -> CreateEmbed {
    CreateEmbed::new()
        .title(&embed.title)
        .colour(embed.color)
        .image(&embed.image_url)
        .footer(CreateEmbedFooter::new(&embed.footer))
}

fn build_message(response: &Response) -> CreateInteractionResponseMessage {
    match response {
        Response::Embed(embed) => CreateInteractionResponseMessage::new().embed(build_embed(embed)),
        Response::Text { content, ephemeral } => CreateInteractionResponseMessage::new().content(content).ephemeral(*ephemeral),
    }
}

fn build_followup(response: &Response) -> CreateInteractionResponseFollowup {
    match response {
        Response::Embed(embed) => CreateInteractionResponseFollowup::new().embed(build_embed(embed)),
        Response::Text { content, ephemeral } => CreateInteractionResponseFollowup::new().content(content).ephemeral(*ephemeral),
    }
}
