use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    /// The category is a parent of live sub-categories, or a sub-category
    /// still referenced by listings. Nothing is deleted.
    #[error("Category is still in use")]
    CategoryInUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, category_id: Uuid) -> Result<(), DeleteCategoryError>;
}
