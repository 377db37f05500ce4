pub mod check_session;
pub mod login;
pub mod logout;

pub use check_session::{CheckSessionError, CheckSessionUseCase, SessionInfo};
pub use login::{LoginData, LoginError, LoginResult, LoginUseCase};
pub use logout::LogoutUseCase;
