use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::categories::application::ports::outgoing::{
    CategoryRecord, CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};

use super::sea_orm_entity::{ActiveModel as CategoryActiveModel, Entity as CategoryEntity};

fn map_create_err(e: DbErr) -> CategoryRepositoryError {
    let unique = matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        || e.to_string().contains("duplicate key");

    if unique {
        CategoryRepositoryError::NameTaken
    } else {
        CategoryRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_delete_err(e: DbErr) -> CategoryRepositoryError {
    let referenced = matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        || e.to_string().contains("foreign key");

    if referenced {
        CategoryRepositoryError::CategoryInUse
    } else {
        CategoryRepositoryError::DatabaseError(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            display_order: Set(data.display_order),
            parent_id: Set(data.parent_id),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_create_err)?;

        Ok(inserted.to_record())
    }

    async fn find_category_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<CategoryRecord>, CategoryRepositoryError> {
        let model = CategoryEntity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn delete_category_row(
        &self,
        category_id: Uuid,
    ) -> Result<(), CategoryRepositoryError> {
        let result = CategoryEntity::delete_by_id(category_id)
            .exec(&*self.db)
            .await
            .map_err(map_delete_err)?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }

        Ok(())
    }
}
