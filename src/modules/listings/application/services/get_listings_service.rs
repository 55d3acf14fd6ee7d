use async_trait::async_trait;
use uuid::Uuid;

use crate::listings::application::ports::{
    incoming::use_cases::{GetListingsError, GetListingsUseCase},
    outgoing::{ListingQuery, ListingView},
};

#[derive(Debug, Clone)]
pub struct GetListingsService<Q>
where
    Q: ListingQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetListingsService<Q>
where
    Q: ListingQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetListingsUseCase for GetListingsService<Q>
where
    Q: ListingQuery + Send + Sync,
{
    async fn execute(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<ListingView>, GetListingsError> {
        self.query
            .active_listings(category_id)
            .await
            .map_err(|e| GetListingsError::RepositoryError(e.to_string()))
    }
}
