pub mod manage_message_services;
pub mod submit_message_service;

pub use manage_message_services::{
    DeleteMessageService, GetMessagesService, GetSingleMessageService, MarkMessageReadService,
};
pub use submit_message_service::SubmitMessageService;
