use async_trait::async_trait;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::ListingView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetListingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetListingsUseCase: Send + Sync {
    async fn execute(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<ListingView>, GetListingsError>;
}
