use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::listings::application::ports::outgoing::{ImageStore, ImageStoreError};

/// TTL for signed read URLs.
const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types/streams.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        data: Vec<u8>,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str)
        -> Result<(), String>;

    async fn sign_get_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        data: Vec<u8>,
    ) -> Result<(), String> {
        self.0.upload_object(bucket_resource, object_name, data).await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }

    async fn sign_get_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        self.0.sign_get_url(bucket_resource, object_name, ttl).await
    }
}

/// Production adapter: blob store for listing images backed by GCS.
#[derive(Clone)]
pub struct GcsImageStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
    signed_url_ttl: Duration,
}

impl GcsImageStore {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket,
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str, signed_url_ttl: Duration) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
            signed_url_ttl,
        }
    }
}

#[async_trait]
impl ImageStore for GcsImageStore {
    async fn store(&self, object_name: &str, data: Vec<u8>) -> Result<String, ImageStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| ImageStoreError::StoreFailed(e.to_string()))?;

        let bucket = bucket_resource(&self.bucket);

        client
            .upload_object(&bucket, object_name, data)
            .await
            .map_err(ImageStoreError::StoreFailed)?;

        // The object name is the reference the database keeps.
        Ok(object_name.to_string())
    }

    async fn delete(&self, reference: &str) -> Result<(), ImageStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| ImageStoreError::DeleteFailed(e.to_string()))?;

        let bucket = bucket_resource(&self.bucket);

        client
            .delete_object(&bucket, reference)
            .await
            .map_err(ImageStoreError::DeleteFailed)
    }

    async fn read_url(&self, reference: &str) -> Result<String, ImageStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| ImageStoreError::SignFailed(e.to_string()))?;

        let bucket = bucket_resource(&self.bucket);

        client
            .sign_get_url(&bucket, reference, self.signed_url_ttl)
            .await
            .map_err(ImageStoreError::SignFailed)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                e
            })?;

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                let msg = e.to_string();
                tracing::error!("Failed to build GCS signer: {:?}", e);

                if msg.contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }

                e
            })?;

        tracing::info!("GCS client created");

        Ok(Self {
            storage,
            control,
            signer,
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        data: Vec<u8>,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(data),
            )
            .send_unbuffered()
            .await
            .map(|_object| ())
            .map_err(|e| e.to_string())
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn sign_get_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        let url = google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::GET)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())?;

        Ok(url)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeGcsClient {
        last_upload_call: Mutex<Option<(String, String, usize)>>,
        last_delete_call: Mutex<Option<(String, String)>>,
        last_sign_call: Mutex<Option<(String, String, Duration)>>,
        upload_result: Mutex<Result<(), String>>,
        delete_result: Mutex<Result<(), String>>,
        sign_result: Mutex<Result<String, String>>,
    }

    impl Default for FakeGcsClient {
        fn default() -> Self {
            Self {
                last_upload_call: Mutex::new(None),
                last_delete_call: Mutex::new(None),
                last_sign_call: Mutex::new(None),
                upload_result: Mutex::new(Ok(())),
                delete_result: Mutex::new(Ok(())),
                sign_result: Mutex::new(Ok("ok".to_string())),
            }
        }
    }

    #[async_trait]
    impl GcsClient for FakeGcsClient {
        async fn upload_object(
            &self,
            bucket_resource: &str,
            object_name: &str,
            data: Vec<u8>,
        ) -> Result<(), String> {
            *self.last_upload_call.lock().unwrap() = Some((
                bucket_resource.to_string(),
                object_name.to_string(),
                data.len(),
            ));
            self.upload_result.lock().unwrap().clone()
        }

        async fn delete_object(
            &self,
            bucket_resource: &str,
            object_name: &str,
        ) -> Result<(), String> {
            *self.last_delete_call.lock().unwrap() =
                Some((bucket_resource.to_string(), object_name.to_string()));
            self.delete_result.lock().unwrap().clone()
        }

        async fn sign_get_url(
            &self,
            bucket_resource: &str,
            object_name: &str,
            ttl: Duration,
        ) -> Result<String, String> {
            *self.last_sign_call.lock().unwrap() =
                Some((bucket_resource.to_string(), object_name.to_string(), ttl));
            self.sign_result.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn store_uploads_under_the_bucket_resource_and_returns_the_reference() {
        let fake = Arc::new(FakeGcsClient::default());

        let store = GcsImageStore::with_client(fake.clone(), "board-images", SIGNED_URL_TTL);

        let reference = store
            .store("listings/2026/03/09/1.jpg", vec![1, 2, 3])
            .await
            .unwrap();

        assert_eq!(reference, "listings/2026/03/09/1.jpg");

        let call = fake.last_upload_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/board-images");
        assert_eq!(call.1, "listings/2026/03/09/1.jpg");
        assert_eq!(call.2, 3);
    }

    #[tokio::test]
    async fn store_maps_upload_failure() {
        let fake = Arc::new(FakeGcsClient::default());
        *fake.upload_result.lock().unwrap() = Err("permission denied".to_string());

        let store = GcsImageStore::with_client(fake, "board-images", SIGNED_URL_TTL);

        let err = store.store("x.jpg", vec![1]).await.unwrap_err();

        assert!(matches!(err, ImageStoreError::StoreFailed(_)));
    }

    #[tokio::test]
    async fn delete_targets_the_stored_reference() {
        let fake = Arc::new(FakeGcsClient::default());

        let store = GcsImageStore::with_client(fake.clone(), "board-images", SIGNED_URL_TTL);

        store.delete("listings/2026/03/09/1.jpg").await.unwrap();

        let call = fake.last_delete_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/board-images");
        assert_eq!(call.1, "listings/2026/03/09/1.jpg");
    }

    #[tokio::test]
    async fn delete_maps_failure() {
        let fake = Arc::new(FakeGcsClient::default());
        *fake.delete_result.lock().unwrap() = Err("404".to_string());

        let store = GcsImageStore::with_client(fake, "board-images", SIGNED_URL_TTL);

        let err = store.delete("x.jpg").await.unwrap_err();

        assert!(matches!(err, ImageStoreError::DeleteFailed(_)));
    }

    #[tokio::test]
    async fn read_url_signs_with_the_configured_ttl() {
        let fake = Arc::new(FakeGcsClient::default());
        *fake.sign_result.lock().unwrap() = Ok("https://signed.example".to_string());

        let store = GcsImageStore::with_client(fake.clone(), "board-images", Duration::from_secs(123));

        let url = store.read_url("listings/a.jpg").await.unwrap();

        assert_eq!(url, "https://signed.example");

        let call = fake.last_sign_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/board-images");
        assert_eq!(call.1, "listings/a.jpg");
        assert_eq!(call.2, Duration::from_secs(123));
    }
}
