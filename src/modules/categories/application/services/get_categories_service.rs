use async_trait::async_trait;

use crate::categories::application::domain::entities::{
    sort_subcategories, sort_top_level, Subcategory, TopLevelCategory,
};
use crate::categories::application::ports::{
    incoming::use_cases::{
        GetCategoriesError, GetSubcategoriesUseCase, GetTopLevelCategoriesUseCase,
    },
    outgoing::CategoryQuery,
};

#[derive(Debug, Clone)]
pub struct GetTopLevelCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopLevelCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopLevelCategoriesUseCase for GetTopLevelCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<TopLevelCategory>, GetCategoriesError> {
        let mut categories = self
            .query
            .top_level()
            .await
            .map_err(|e| GetCategoriesError::RepositoryError(e.to_string()))?;

        sort_top_level(&mut categories);
        Ok(categories)
    }
}

#[derive(Debug, Clone)]
pub struct GetSubcategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSubcategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSubcategoriesUseCase for GetSubcategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Subcategory>, GetCategoriesError> {
        let mut subcategories = self
            .query
            .subcategories()
            .await
            .map_err(|e| GetCategoriesError::RepositoryError(e.to_string()))?;

        sort_subcategories(&mut subcategories);
        Ok(subcategories)
    }
}
