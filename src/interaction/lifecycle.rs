use tracing::{error, info, instrument};

use crate::{
    base::{config::Config, types::ReadyInfo},
    interaction::registry::CommandRegistry,
    service::chat::GenericSession,
};

/// Handles the platform's "ready" event.
///
/// Logs the connection identity, sets the presence and then synchronizes the
/// command registry. A failed sync is logged and otherwise ignored; commands
/// registered by an earlier run may still be served.
#[instrument(skip_all)]
pub async fn handle_ready(info: &ReadyInfo, session: &dyn GenericSession, config: &Config, commands: &CommandRegistry) {
    info!("{} has connected to Discord!", info.user_tag);
    info!("Bot is in {} guilds", info.guild_count);

    session.set_presence(&config.presence_activity);

    info!("Started refreshing application (/) commands.");

    match session.sync_commands(commands.definitions()).await {
        Ok(count) => info!("Synced {} command(s)", count),
        Err(err) => error!("Failed to sync commands: {}", err),
    }
}
