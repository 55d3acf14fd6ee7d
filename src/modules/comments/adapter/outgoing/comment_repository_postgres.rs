use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::comments::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, CommentResult, CreateCommentData,
    UpdateCommentData,
};

use super::sea_orm_entity::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as CommentEntity,
    Model as CommentModel,
};

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    if matches!(e, DbErr::RecordNotFound(_)) {
        CommentRepositoryError::CommentNotFound
    } else {
        CommentRepositoryError::DatabaseError(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError> {
        let active = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            listing_id: Set(data.listing_id),
            author_name: Set(data.author_name),
            content: Set(data.content),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted: CommentModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_result())
    }

    async fn comments_for_listing(
        &self,
        listing_id: Uuid,
    ) -> Result<Vec<CommentResult>, CommentRepositoryError> {
        let models: Vec<CommentModel> = CommentEntity::find()
            .filter(CommentColumn::ListingId.eq(listing_id))
            .filter(CommentColumn::IsActive.eq(true))
            .order_by_asc(CommentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_result()).collect())
    }

    async fn update_comment(
        &self,
        comment_id: Uuid,
        data: UpdateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError> {
        let mut active = CommentActiveModel {
            id: Set(comment_id),
            ..Default::default()
        };

        if let Some(content) = data.content {
            active.content = Set(content);
        }

        if let Some(is_active) = data.is_active {
            active.is_active = Set(is_active);
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_result())
    }
}
