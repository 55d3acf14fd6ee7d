use actix_web::{post, web, HttpResponse, Responder};
use base64::Engine;
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    listings::application::ports::incoming::use_cases::{
        CreateListingCommand, CreateListingCommandError, CreateListingError, ImagePayload,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Image upload carried inline as base64.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImagePayloadDto {
    /// Base64-encoded file content
    pub data: String,

    /// File extension used for the stored object name
    #[schema(example = "jpg")]
    pub extension: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListingRequest {
    /// Sub-category the listing is filed under
    pub category_id: Uuid,

    /// Account that owns the listing
    pub author_id: Uuid,

    #[schema(example = "Mountain bike")]
    pub title: String,

    pub description: String,

    #[schema(example = 250.0)]
    pub price: f64,

    #[schema(example = "+1 555 0100, evenings")]
    pub contacts: String,

    /// Optional primary image
    pub image: Option<ImagePayloadDto>,
}

impl ImagePayloadDto {
    fn decode(&self) -> Result<ImagePayload, HttpResponse> {
        let data = base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| {
                warn!(error = %e, "Rejected undecodable image payload");
                ApiResponse::bad_request("INVALID_IMAGE_DATA", "Image data is not valid base64")
            })?;

        Ok(ImagePayload {
            data,
            extension: self.extension.clone(),
        })
    }
}

/// Create a listing
///
/// Files a new listing under a sub-category; an optional primary image is
/// stored before the record is written.
#[utoipa::path(
    post,
    path = "/api/listings",
    tag = "listings",
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing created"),
        (status = 400, description = "Validation error", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Category or author not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/listings")]
pub async fn create_listing_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateListingRequest>,
) -> impl Responder {
    let image = match &payload.image {
        Some(dto) => match dto.decode() {
            Ok(decoded) => Some(decoded),
            Err(response) => return response,
        },
        None => None,
    };

    let command = match CreateListingCommand::new(
        payload.category_id,
        payload.author_id,
        payload.title.clone(),
        payload.description.clone(),
        payload.price,
        payload.contacts.clone(),
        image,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_listing.execute(command).await {
        Ok(listing) => ApiResponse::created(listing),
        Err(err) => map_create_listing_error(err),
    }
}

fn map_command_error(err: CreateListingCommandError) -> HttpResponse {
    match err {
        CreateListingCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateListingCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 40 characters")
        }
        CreateListingCommandError::InvalidPrice => {
            ApiResponse::bad_request("INVALID_PRICE", "Price must be a non-negative number")
        }
        CreateListingCommandError::EmptyContacts => {
            ApiResponse::bad_request("EMPTY_CONTACTS", "Contacts cannot be empty")
        }
        CreateListingCommandError::EmptyImage => {
            ApiResponse::bad_request("EMPTY_IMAGE", "Image payload is empty")
        }
    }
}

fn map_create_listing_error(err: CreateListingError) -> HttpResponse {
    match err {
        CreateListingError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        CreateListingError::CategoryNotSubcategory => ApiResponse::bad_request(
            "CATEGORY_NOT_SUBCATEGORY",
            "Listings must be filed under a sub-category",
        ),
        CreateListingError::AuthorNotFound => {
            ApiResponse::not_found("AUTHOR_NOT_FOUND", "Author not found")
        }
        CreateListingError::StorageError(_) | CreateListingError::RepositoryError(_) => {
            ApiResponse::internal_error()
        }
    }
}
