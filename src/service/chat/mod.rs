pub mod discord;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::{
    base::types::{Res, Response, Void},
    interaction::registry::CommandDefinition,
};

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// Implementations own the connection to the chat platform, its event loop and
/// the registration transport. The bot only ever starts the client; everything
/// else arrives through lifecycle callbacks.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Connect to the platform and process events until shutdown.
    ///
    /// Returns an error if the platform rejects the credential or the
    /// connection fails for good.
    async fn start(&self) -> Void;
}

/// Operations available once the platform reports the connection as ready.
#[async_trait]
pub trait GenericSession: Send + Sync {
    /// Set the bot's "listening" activity.
    fn set_presence(&self, activity: &str);

    /// Push the command definitions to the platform.
    ///
    /// Returns the number of commands the platform acknowledged.
    async fn sync_commands(&self, commands: &[CommandDefinition]) -> Res<usize>;
}

/// The response channel back to the platform for a single invocation.
///
/// Callers should go through [`crate::interaction::reply::InteractionReply`],
/// which guarantees a single primary response.
#[async_trait]
pub trait GenericResponder: Send + Sync {
    /// Acknowledge the invocation without content, buying time for a follow-up.
    async fn defer(&self) -> Void;

    /// Send the initial response to the invocation.
    async fn reply(&self, response: &Response) -> Void;

    /// Send a response after the invocation has been deferred.
    async fn follow_up(&self, response: &Response) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}

/// Per-invocation responder, trivially cloneable.
#[derive(Clone)]
pub struct Responder {
    inner: Arc<dyn GenericResponder>,
}

impl Deref for Responder {
    type Target = dyn GenericResponder;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Responder {
    pub fn new(inner: Arc<dyn GenericResponder>) -> Self {
        Self { inner }
    }
}
