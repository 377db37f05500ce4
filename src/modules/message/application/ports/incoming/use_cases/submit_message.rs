use async_trait::async_trait;
use std::fmt;

use crate::modules::message::application::domain::entities::Message;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum SubmitMessageError {
    RepositoryError(String),
}

impl fmt::Display for SubmitMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitMessageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitMessageInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Hidden field legitimate users never fill. Non-empty means a bot.
    pub honeypot: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SubmitMessageOutcome {
    Stored(Message),
    /// Honeypot tripped: nothing was stored, and the caller must answer
    /// exactly as if the submission had succeeded.
    Discarded,
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        data: SubmitMessageInput,
    ) -> Result<SubmitMessageOutcome, SubmitMessageError>;
}
