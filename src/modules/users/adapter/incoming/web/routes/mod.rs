mod delete_user;
mod get_user_profile;
pub mod register_user;

pub use delete_user::delete_user_handler;
pub use get_user_profile::get_user_profile_handler;
pub use register_user::{register_user_handler, RegisterUserRequest};
