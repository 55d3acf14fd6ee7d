use async_trait::async_trait;

use crate::categories::application::ports::{
    incoming::use_cases::{DeleteCategoryError, DeleteCategoryUseCase},
    outgoing::{CategoryQuery, CategoryRepository, CategoryRepositoryError},
};
use crate::listings::application::ports::outgoing::listing_query::ListingQuery;
use uuid::Uuid;

/// Protective deletion: a category still referenced by sub-categories or by
/// listings is never removed.
pub struct DeleteCategoryService<R, Q, L>
where
    R: CategoryRepository + Send + Sync,
    Q: CategoryQuery + Send + Sync,
    L: ListingQuery + Send + Sync,
{
    repository: R,
    category_query: Q,
    listing_query: L,
}

impl<R, Q, L> DeleteCategoryService<R, Q, L>
where
    R: CategoryRepository + Send + Sync,
    Q: CategoryQuery + Send + Sync,
    L: ListingQuery + Send + Sync,
{
    pub fn new(repository: R, category_query: Q, listing_query: L) -> Self {
        Self {
            repository,
            category_query,
            listing_query,
        }
    }
}

#[async_trait]
impl<R, Q, L> DeleteCategoryUseCase for DeleteCategoryService<R, Q, L>
where
    R: CategoryRepository + Send + Sync,
    Q: CategoryQuery + Send + Sync,
    L: ListingQuery + Send + Sync,
{
    async fn execute(&self, category_id: Uuid) -> Result<(), DeleteCategoryError> {
        let category = self
            .repository
            .find_category_by_id(category_id)
            .await
            .map_err(|e| DeleteCategoryError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCategoryError::CategoryNotFound)?;

        match category.parent_id {
            // Top-level: blocked while any sub-category hangs off it.
            None => {
                let in_use = self
                    .category_query
                    .has_subcategories(category_id)
                    .await
                    .map_err(|e| DeleteCategoryError::RepositoryError(e.to_string()))?;

                if in_use {
                    return Err(DeleteCategoryError::CategoryInUse);
                }
            }
            // Sub-category: blocked while any listing is filed under it.
            Some(_) => {
                let in_use = self
                    .listing_query
                    .category_has_listings(category_id)
                    .await
                    .map_err(|e| DeleteCategoryError::RepositoryError(e.to_string()))?;

                if in_use {
                    return Err(DeleteCategoryError::CategoryInUse);
                }
            }
        }

        self.repository
            .delete_category_row(category_id)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => DeleteCategoryError::CategoryNotFound,
                // The engine-level RESTRICT closes the race between the
                // checks above and the delete.
                CategoryRepositoryError::CategoryInUse => DeleteCategoryError::CategoryInUse,
                other => DeleteCategoryError::RepositoryError(other.to_string()),
            })
    }
}
