use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ImageStoreError {
    #[error("Storing image failed: {0}")]
    StoreFailed(String),

    #[error("Deleting image failed: {0}")]
    DeleteFailed(String),

    #[error("Signing read URL failed: {0}")]
    SignFailed(String),
}

/// Blob storage seam: store bytes, get a reference back, delete or sign by
/// reference. The database only ever holds the reference strings.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores the bytes under `object_name` and returns the reference to
    /// persist.
    async fn store(&self, object_name: &str, data: Vec<u8>) -> Result<String, ImageStoreError>;

    async fn delete(&self, reference: &str) -> Result<(), ImageStoreError>;

    /// Short-lived read URL for serving the image to clients.
    async fn read_url(&self, reference: &str) -> Result<String, ImageStoreError>;
}

/// Upload-timestamp object naming: `listings/<year>/<month>/<day>/<millis>.<ext>`.
pub fn timestamp_object_name(now: DateTime<Utc>, extension: &str) -> String {
    format!(
        "listings/{:04}/{:02}/{:02}/{}.{}",
        now.year(),
        now.month(),
        now.day(),
        now.timestamp_millis(),
        extension,
    )
}
