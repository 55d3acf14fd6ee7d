use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    categories::application::ports::incoming::use_cases::{
        CreateCategoryCommand, CreateCategoryCommandError, CreateCategoryError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct CreateCategoryRequest {
    pub name: String,
    pub display_order: Option<i16>,
    pub parent_id: Option<Uuid>,
}

#[post("/api/categories")]
pub async fn create_category_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateCategoryRequest>,
) -> impl Responder {
    let command = match CreateCategoryCommand::new(
        payload.name.clone(),
        payload.display_order.unwrap_or(0),
        payload.parent_id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_category.execute(command).await {
        Ok(category) => ApiResponse::created(category),
        Err(err) => map_create_category_error(err),
    }
}

fn map_command_error(err: CreateCategoryCommandError) -> actix_web::HttpResponse {
    match err {
        CreateCategoryCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        CreateCategoryCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 30 characters")
        }
    }
}

fn map_create_category_error(err: CreateCategoryError) -> actix_web::HttpResponse {
    match err {
        CreateCategoryError::NameTaken => {
            ApiResponse::conflict("NAME_TAKEN", "Category name already taken")
        }
        CreateCategoryError::ParentNotFound => {
            ApiResponse::not_found("PARENT_NOT_FOUND", "Parent category not found")
        }
        CreateCategoryError::ParentNotTopLevel => ApiResponse::bad_request(
            "PARENT_NOT_TOP_LEVEL",
            "A sub-category's parent must be a top-level category",
        ),
        CreateCategoryError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
