pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// A single user-triggered slash command event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The name of the invoked command.
    pub command_name: String,
    /// The invoking user's ID.
    pub user_id: u64,
    /// The invoking user's display name.
    pub user_name: String,
    /// The invoking user's tag (used for logging).
    pub user_tag: String,
    /// The guild the command was invoked in, if any.
    pub guild_id: Option<u64>,
    /// The guild name, if it could be resolved.
    pub guild_name: Option<String>,
    /// The channel the command was invoked in.
    pub channel_id: u64,
}

impl Invocation {
    /// Human-readable origin of the invocation: the guild name, or `DM`.
    pub fn location(&self) -> String {
        match (&self.guild_name, self.guild_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => "DM".to_string(),
        }
    }
}

/// A structured embed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedResponse {
    pub title: String,
    pub color: u32,
    pub image_url: String,
    pub footer: String,
}

/// The payload a command handler hands to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Embed(EmbedResponse),
    Text { content: String, ephemeral: bool },
}

impl Response {
    /// A plain text response visible to the whole channel.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text { content: content.into(), ephemeral: false }
    }

    /// A plain text response visible only to the invoking user.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::Text { content: content.into(), ephemeral: true }
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Text { ephemeral: true, .. })
    }
}

/// Identity information reported by the platform once connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyInfo {
    pub user_tag: String,
    pub guild_count: usize,
}
