use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub display_order: i16,
    pub parent_id: Option<Uuid>,
}

/// One row of the shared category table. `parent_id == None` marks a
/// top-level category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub display_order: i16,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category name already taken")]
    NameTaken,

    #[error("Category is still referenced")]
    CategoryInUse,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError>;

    async fn find_category_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<CategoryRecord>, CategoryRepositoryError>;

    /// Deletes exactly one row. The engine-level RESTRICT on references
    /// surfaces as [`CategoryRepositoryError::CategoryInUse`].
    async fn delete_category_row(&self, category_id: Uuid)
        -> Result<(), CategoryRepositoryError>;
}
