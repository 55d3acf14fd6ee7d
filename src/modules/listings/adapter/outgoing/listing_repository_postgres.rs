use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::{
    CreateListingData, ListingRepository, ListingRepositoryError, ListingResult,
};

use super::sea_orm_entity::listings::{
    ActiveModel as ListingActiveModel, Column as ListingColumn, Entity as ListingEntity,
    Model as ListingModel,
};

#[derive(Debug, Clone)]
pub struct ListingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ListingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListingRepository for ListingRepositoryPostgres {
    async fn create_listing(
        &self,
        data: CreateListingData,
    ) -> Result<ListingResult, ListingRepositoryError> {
        let active = ListingActiveModel {
            id: Set(Uuid::new_v4()),
            category_id: Set(data.category_id),
            author_id: Set(data.author_id),
            title: Set(data.title),
            description: Set(data.description),
            price: Set(data.price),
            contacts: Set(data.contacts),
            image: Set(data.image),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted: ListingModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ListingRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_result())
    }

    async fn find_listing_by_id(
        &self,
        listing_id: Uuid,
    ) -> Result<Option<ListingResult>, ListingRepositoryError> {
        let model = ListingEntity::find_by_id(listing_id)
            .one(&*self.db)
            .await
            .map_err(|e| ListingRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_result()))
    }

    async fn listings_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<ListingResult>, ListingRepositoryError> {
        let models: Vec<ListingModel> = ListingEntity::find()
            .filter(ListingColumn::AuthorId.eq(author_id))
            .order_by_desc(ListingColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ListingRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_result()).collect())
    }

    async fn delete_listing_row(
        &self,
        listing_id: Uuid,
    ) -> Result<(), ListingRepositoryError> {
        let result = ListingEntity::delete_by_id(listing_id)
            .exec(&*self.db)
            .await
            .map_err(|e| ListingRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ListingRepositoryError::ListingNotFound);
        }

        Ok(())
    }
}
