use actix_web::{post, web, Responder};
use base64::Engine;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::{
    listings::application::ports::incoming::use_cases::{AddListingImageError, ImagePayload},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
struct AddImageRequest {
    /// Base64-encoded file content
    pub data: String,

    pub extension: String,
}

#[post("/api/listings/{listing_id}/images")]
pub async fn add_listing_image_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<AddImageRequest>,
) -> impl Responder {
    let listing_id = path.into_inner();

    let bytes = match base64::engine::general_purpose::STANDARD.decode(&payload.data) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(listing_id = %listing_id, error = %e, "Rejected undecodable image payload");
            return ApiResponse::bad_request(
                "INVALID_IMAGE_DATA",
                "Image data is not valid base64",
            );
        }
    };

    let image = ImagePayload {
        data: bytes,
        extension: payload.extension.clone(),
    };

    match data.add_listing_image.execute(listing_id, image).await {
        Ok(record) => ApiResponse::created(record),
        Err(AddListingImageError::ListingNotFound) => {
            ApiResponse::not_found("LISTING_NOT_FOUND", "Listing not found")
        }
        Err(AddListingImageError::EmptyImage) => {
            ApiResponse::bad_request("EMPTY_IMAGE", "Image payload is empty")
        }
        Err(AddListingImageError::StorageError(_) | AddListingImageError::RepositoryError(_)) => {
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::listings::application::ports::incoming::use_cases::AddListingImageUseCase;
    use crate::listings::application::ports::outgoing::ListingImageRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockAddListingImageUseCase {
        result: Result<ListingImageRecord, AddListingImageError>,
    }

    #[async_trait]
    impl AddListingImageUseCase for MockAddListingImageUseCase {
        async fn execute(
            &self,
            _listing_id: Uuid,
            _payload: ImagePayload,
        ) -> Result<ListingImageRecord, AddListingImageError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn image_is_added() {
        let listing_id = Uuid::new_v4();
        let record = ListingImageRecord {
            id: Uuid::new_v4(),
            listing_id,
            image: "listings/a.jpg".to_string(),
        };

        let state = TestAppStateBuilder::default()
            .with_add_listing_image(MockAddListingImageUseCase {
                result: Ok(record.clone()),
            })
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(add_listing_image_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/listings/{}/images", listing_id))
            .set_json(serde_json::json!({ "data": "aGVsbG8=", "extension": "jpg" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn invalid_base64_is_rejected() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new().app_data(state).service(add_listing_image_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/listings/{}/images", Uuid::new_v4()))
            .set_json(serde_json::json!({ "data": "%%%", "extension": "jpg" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
