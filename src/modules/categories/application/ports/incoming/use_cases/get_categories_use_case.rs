use async_trait::async_trait;

use crate::categories::application::domain::entities::{Subcategory, TopLevelCategory};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoriesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTopLevelCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TopLevelCategory>, GetCategoriesError>;
}

#[async_trait]
pub trait GetSubcategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Subcategory>, GetCategoriesError>;
}
