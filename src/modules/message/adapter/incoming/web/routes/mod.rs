pub mod manage_messages;
pub mod submit_message;

pub use manage_messages::{
    delete_message_handler, get_messages_handler, get_single_message_handler,
    mark_message_read_handler,
};
pub use submit_message::submit_message_handler;
