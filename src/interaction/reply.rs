use tracing::instrument;

use crate::{
    base::types::{Response, Void},
    service::chat::Responder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplyState {
    Pending,
    Deferred,
    Sent,
}

/// Tracks the response lifecycle of a single invocation.
///
/// At most one primary response is ever delivered: the first successful
/// [`send`](Self::send) or [`send_error`](Self::send_error) closes the reply,
/// and every later attempt is rejected. Sends are routed to the initial reply
/// or to the follow-up depending on whether the invocation was deferred.
pub struct InteractionReply {
    responder: Responder,
    state: ReplyState,
}

impl InteractionReply {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder,
            state: ReplyState::Pending,
        }
    }

    /// Whether a primary response has been delivered.
    pub fn is_sent(&self) -> bool {
        self.state == ReplyState::Sent
    }

    /// Whether the invocation has been acknowledged in any way.
    pub fn is_acknowledged(&self) -> bool {
        self.state != ReplyState::Pending
    }

    /// Acknowledge the invocation so the response can be sent later.
    #[instrument(skip_all)]
    pub async fn defer(&mut self) -> Void {
        if self.is_acknowledged() {
            return Err(anyhow::anyhow!("Interaction has already been acknowledged."));
        }

        self.responder.defer().await?;
        self.state = ReplyState::Deferred;

        Ok(())
    }

    /// Deliver the primary response.
    #[instrument(skip_all)]
    pub async fn send(&mut self, response: Response) -> Void {
        match self.state {
            ReplyState::Pending => self.responder.reply(&response).await?,
            ReplyState::Deferred => self.responder.follow_up(&response).await?,
            ReplyState::Sent => return Err(anyhow::anyhow!("Interaction has already been answered.")),
        }

        self.state = ReplyState::Sent;

        Ok(())
    }

    /// Deliver an ephemeral error message in place of the primary response.
    pub async fn send_error(&mut self, message: &str) -> Void {
        self.send(Response::ephemeral(message)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::service::chat::GenericResponder;

    /// Records every call made to the platform.
    #[derive(Default)]
    struct RecordingResponder {
        calls: Mutex<Vec<String>>,
        fail_replies: bool,
    }

    #[async_trait]
    impl GenericResponder for RecordingResponder {
        async fn defer(&self) -> Void {
            self.calls.lock().unwrap().push("defer".to_string());
            Ok(())
        }

        async fn reply(&self, _response: &Response) -> Void {
            self.calls.lock().unwrap().push("reply".to_string());
            if self.fail_replies {
                return Err(anyhow::anyhow!("boom"));
            }
            Ok(())
        }

        async fn follow_up(&self, _response: &Response) -> Void {
            self.calls.lock().unwrap().push("follow_up".to_string());
            Ok(())
        }
    }

    fn reply(recorder: &Arc<RecordingResponder>) -> InteractionReply {
        InteractionReply::new(Responder::new(recorder.clone()))
    }

    #[tokio::test]
    async fn test_immediate_reply() {
        let recorder = Arc::new(RecordingResponder::default());
        let mut reply = reply(&recorder);

        reply.send(Response::text("hi")).await.unwrap();

        assert!(reply.is_sent());
        assert_eq!(*recorder.calls.lock().unwrap(), vec!["reply"]);
    }

    #[tokio::test]
    async fn test_deferred_reply_uses_follow_up() {
        let recorder = Arc::new(RecordingResponder::default());
        let mut reply = reply(&recorder);

        reply.defer().await.unwrap();
        assert!(reply.is_acknowledged());
        assert!(!reply.is_sent());

        reply.send(Response::text("hi")).await.unwrap();

        assert_eq!(*recorder.calls.lock().unwrap(), vec!["defer", "follow_up"]);
    }

    #[tokio::test]
    async fn test_second_send_is_rejected() {
        let recorder = Arc::new(RecordingResponder::default());
        let mut reply = reply(&recorder);

        reply.send(Response::text("hi")).await.unwrap();

        assert!(reply.send_error("oops").await.is_err());
        assert!(reply.defer().await.is_err());
        assert_eq!(*recorder.calls.lock().unwrap(), vec!["reply"]);
    }

    #[tokio::test]
    async fn test_failed_send_leaves_reply_open() {
        let recorder = Arc::new(RecordingResponder {
            fail_replies: true,
            ..Default::default()
        });
        let mut reply = reply(&recorder);

        assert!(reply.send(Response::text("hi")).await.is_err());
        assert!(!reply.is_sent());
        assert!(!reply.is_acknowledged());
    }
}
