pub mod check_session;
pub mod login;
pub mod logout;

pub use check_session::check_session_handler;
pub use login::login_handler;
pub use logout::logout_handler;
