// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

// Success payloads are documented per endpoint; the error envelope is the
// shared shape worth a schema.

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "CATEGORY_IN_USE")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Category is still referenced")]
    pub message: String,
}
