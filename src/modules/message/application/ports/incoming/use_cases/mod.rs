pub mod manage_messages;
pub mod submit_message;

pub use manage_messages::{
    DeleteMessageUseCase, GetMessagesUseCase, GetSingleMessageUseCase, ManageMessageError,
    MarkMessageReadUseCase,
};
pub use submit_message::{
    SubmitMessageError, SubmitMessageInput, SubmitMessageOutcome, SubmitMessageUseCase,
};
