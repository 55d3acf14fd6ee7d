use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::users::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::{ActiveModel as UserActiveModel, Entity as UserEntity};

fn map_create_err(e: DbErr) -> UserRepositoryError {
    let unique = matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        || e.to_string().contains("duplicate key");

    if unique {
        UserRepositoryError::UserAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            is_activated: Set(data.is_activated),
            send_messages: Set(data.send_messages),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_create_err)?;

        Ok(inserted.to_result())
    }

    async fn find_user_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserResult>, UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_result()))
    }

    async fn delete_user_row(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
