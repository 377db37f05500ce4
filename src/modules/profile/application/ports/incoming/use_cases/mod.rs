pub mod create_profile;
pub mod get_profile;
pub mod update_profile;

pub use create_profile::{CreateProfileError, CreateProfileInput, CreateProfileUseCase};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase};
