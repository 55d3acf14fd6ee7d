use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::listings::adapter::incoming::web::routes::{CreateListingRequest, ImagePayloadDto};
use crate::users::adapter::incoming::web::routes::RegisterUserRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Board API",
        version = "1.0.0",
        description = "Data layer of the classifieds board: accounts, categories, listings, comments"
    ),
    paths(
        crate::users::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::listings::adapter::incoming::web::routes::create_listing::create_listing_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            RegisterUserRequest,
            CreateListingRequest,
            ImagePayloadDto,
        )
    ),
    tags(
        (name = "users", description = "Account endpoints"),
        (name = "categories", description = "Category tree endpoints"),
        (name = "listings", description = "Listing endpoints"),
        (name = "comments", description = "Comment endpoints"),
    )
)]
pub struct ApiDoc;
