pub mod auth;
pub mod certification;
pub mod education;
pub mod message;
pub mod multimedia;
pub mod profile;
pub mod project;
pub mod stats;
