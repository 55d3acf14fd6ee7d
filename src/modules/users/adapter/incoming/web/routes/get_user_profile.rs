use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    users::application::ports::incoming::use_cases::GetUserProfileError, AppState,
};

#[get("/api/users/{user_id}")]
pub async fn get_user_profile_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.get_user_profile.execute(user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(GetUserProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetUserProfileError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
