use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::{
    shared::api::ApiResponse,
    users::application::ports::incoming::use_cases::{
        RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
    },
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Username (unique identifier)
    #[schema(example = "seller01")]
    pub username: String,

    /// Email address
    #[schema(example = "seller@example.com")]
    pub email: String,

    /// Email the account about new comments on its listings (default true)
    pub send_messages: Option<bool>,
}

/// Register an account
///
/// Persists the account record. The surrounding registration flow
/// (passwords, activation emails) lives outside this service.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Validation error", body = crate::api::schemas::ErrorResponse),
        (status = 409, description = "User already exists", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/users")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> impl Responder {
    let command = match RegisterUserCommand::new(
        payload.username.clone(),
        payload.email.clone(),
        payload.send_messages.unwrap_or(true),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err, &payload),
    };

    match data.register_user.execute(command).await {
        Ok(user) => ApiResponse::created(user),
        Err(RegisterUserError::UserAlreadyExists) => {
            warn!(username = %payload.username, "User already exists");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }
        Err(RegisterUserError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

fn map_command_error(err: RegisterUserCommandError, req: &RegisterUserRequest) -> HttpResponse {
    warn!(
        username = %req.username,
        email = %req.email,
        error = %err,
        "Invalid registration input"
    );

    match err {
        RegisterUserCommandError::InvalidUsername => ApiResponse::bad_request(
            "INVALID_USERNAME",
            "Username must be 3-30 characters of letters, digits or underscores",
        ),
        RegisterUserCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
    }
}
