//! `/chickensoup`: a fixed rant, sent immediately.

use tracing::{error, info, instrument};

use crate::{
    base::types::{Invocation, Response, Void},
    interaction::reply::InteractionReply,
    service::chat::Responder,
};

pub const NAME: &str = "chickensoup";
pub const DESCRIPTION: &str = "Express frustration about packet chicken soup";

pub const MESSAGE: &str = "my fucking mother cooks this horrid packet chicken soup SHIT I hate it, it smells so bad and gets everywhere";
pub const ERROR_MESSAGE: &str = "Sorry, something went wrong!";

#[instrument(skip_all, fields(user = %invocation.user_tag))]
pub async fn handle_chickensoup(invocation: Invocation, responder: Responder) {
    let mut reply = InteractionReply::new(responder);

    // Process the invocation.
    let result = handle_chickensoup_internal(&mut reply).await;

    match result {
        Ok(()) => info!("Chickensoup command used by {} in {}", invocation.user_tag, invocation.location()),
        Err(err) => {
            error!("Error in chickensoup command: {}", err);

            if let Err(err) = reply.send_error(ERROR_MESSAGE).await {
                error!("Failed to send error message to user: {}", err);
            }
        }
    }
}

async fn handle_chickensoup_internal(reply: &mut InteractionReply) -> Void {
    reply.send(Response::text(MESSAGE)).await
}
