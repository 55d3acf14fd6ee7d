use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::{
    ListingQuery, ListingQueryError, ListingView,
};

use super::sea_orm_entity::listings::{
    Column as ListingColumn, Entity as ListingEntity, Model as ListingModel,
};

#[derive(Debug, Clone)]
pub struct ListingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ListingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListingQuery for ListingQueryPostgres {
    async fn active_listings(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<ListingView>, ListingQueryError> {
        let mut select = ListingEntity::find()
            .filter(ListingColumn::IsActive.eq(true))
            .order_by_desc(ListingColumn::CreatedAt);

        if let Some(category_id) = category_id {
            select = select.filter(ListingColumn::CategoryId.eq(category_id));
        }

        let models: Vec<ListingModel> = select
            .all(&*self.db)
            .await
            .map_err(|e| ListingQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_view()).collect())
    }

    async fn category_has_listings(
        &self,
        category_id: Uuid,
    ) -> Result<bool, ListingQueryError> {
        let listing = ListingEntity::find()
            .filter(ListingColumn::CategoryId.eq(category_id))
            .limit(1)
            .one(&*self.db)
            .await
            .map_err(|e| ListingQueryError::DatabaseError(e.to_string()))?;

        Ok(listing.is_some())
    }
}
