use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::{
    ImageRepository, ImageRepositoryError, ListingImageRecord,
};

use super::sea_orm_entity::listing_images::{
    ActiveModel as ImageActiveModel, Column as ImageColumn, Entity as ImageEntity,
    Model as ImageModel,
};

#[derive(Debug, Clone)]
pub struct ImageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ImageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ImageRepository for ImageRepositoryPostgres {
    async fn add_image(
        &self,
        listing_id: Uuid,
        image: String,
    ) -> Result<ListingImageRecord, ImageRepositoryError> {
        let active = ImageActiveModel {
            id: Set(Uuid::new_v4()),
            listing_id: Set(listing_id),
            image: Set(image),
            ..Default::default()
        };

        let inserted: ImageModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ImageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn images_for_listing(
        &self,
        listing_id: Uuid,
    ) -> Result<Vec<ListingImageRecord>, ImageRepositoryError> {
        let models: Vec<ImageModel> = ImageEntity::find()
            .filter(ImageColumn::ListingId.eq(listing_id))
            .all(&*self.db)
            .await
            .map_err(|e| ImageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn delete_image_row(&self, image_id: Uuid) -> Result<(), ImageRepositoryError> {
        let result = ImageEntity::delete_by_id(image_id)
            .exec(&*self.db)
            .await
            .map_err(|e| ImageRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ImageRepositoryError::ImageNotFound);
        }

        Ok(())
    }
}
