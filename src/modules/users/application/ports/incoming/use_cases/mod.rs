mod delete_user_use_case;
mod get_user_profile_use_case;
mod register_user_use_case;

pub use delete_user_use_case::{DeleteUserError, DeleteUserUseCase};
pub use get_user_profile_use_case::{GetUserProfileError, GetUserProfileUseCase};
pub use register_user_use_case::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
