pub mod check_session_service;
pub mod login_service;
pub mod logout_service;

pub use check_session_service::CheckSessionService;
pub use login_service::LoginService;
pub use logout_service::LogoutService;
