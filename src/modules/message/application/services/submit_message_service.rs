use async_trait::async_trait;
use tracing::debug;

use crate::modules::message::application::ports::incoming::use_cases::{
    SubmitMessageError, SubmitMessageInput, SubmitMessageOutcome, SubmitMessageUseCase,
};
use crate::modules::message::application::ports::outgoing::message_repository::{
    MessageRepository, NewMessageData,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Contact intake. A tripped honeypot discards the submission before the
/// repository is ever touched; callers answer identically either way so
/// automation cannot probe the difference.
pub struct SubmitMessageService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> SubmitMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> SubmitMessageUseCase for SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: SubmitMessageInput,
    ) -> Result<SubmitMessageOutcome, SubmitMessageError> {
        if data.honeypot.as_deref().is_some_and(|h| !h.is_empty()) {
            debug!("honeypot tripped, discarding contact submission");
            return Ok(SubmitMessageOutcome::Discarded);
        }

        let stored = self
            .message_repository
            .create(NewMessageData {
                name: data.name,
                email: data.email,
                subject: data.subject,
                message: data.message,
            })
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))?;

        Ok(SubmitMessageOutcome::Stored(stored))
    }
}
