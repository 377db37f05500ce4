pub mod create_profile_service;
pub mod get_profile_service;
pub mod update_profile_service;

pub use create_profile_service::CreateProfileService;
pub use get_profile_service::GetProfileService;
pub use update_profile_service::UpdateProfileService;
