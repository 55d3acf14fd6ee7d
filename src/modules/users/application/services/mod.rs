mod delete_user_service;
mod get_user_profile_service;
mod register_user_service;

pub use delete_user_service::DeleteUserService;
pub use get_user_profile_service::GetUserProfileService;
pub use register_user_service::RegisterUserService;
