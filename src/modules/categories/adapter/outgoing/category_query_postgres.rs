use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::categories::application::domain::entities::{
    sort_subcategories, Subcategory, TopLevelCategory,
};
use crate::categories::application::ports::outgoing::{CategoryQuery, CategoryQueryError};

use super::sea_orm_entity::{
    Column as CategoryColumn, Entity as CategoryEntity, Model as CategoryModel,
};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn top_level(&self) -> Result<Vec<TopLevelCategory>, CategoryQueryError> {
        let models: Vec<CategoryModel> = CategoryEntity::find()
            .filter(CategoryColumn::ParentId.is_null())
            .order_by_asc(CategoryColumn::DisplayOrder)
            .order_by_asc(CategoryColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_top_level()).collect())
    }

    async fn subcategories(&self) -> Result<Vec<Subcategory>, CategoryQueryError> {
        // Two filtered reads of the shared table, composed in memory; the
        // sub view needs each child paired with its parent row.
        let parents: Vec<CategoryModel> = CategoryEntity::find()
            .filter(CategoryColumn::ParentId.is_null())
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        let children: Vec<CategoryModel> = CategoryEntity::find()
            .filter(CategoryColumn::ParentId.is_not_null())
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        let parents_by_id: HashMap<Uuid, &CategoryModel> =
            parents.iter().map(|p| (p.id, p)).collect();

        let mut subcategories: Vec<Subcategory> = Vec::with_capacity(children.len());
        for child in &children {
            let parent_id = match child.parent_id {
                Some(id) => id,
                None => continue,
            };

            match parents_by_id.get(&parent_id) {
                Some(parent) => subcategories.push(child.to_subcategory(parent)),
                None => {
                    // The FK makes this unreachable; don't fail the whole
                    // view over one broken row.
                    tracing::warn!(
                        category_id = %child.id,
                        parent_id = %parent_id,
                        "Sub-category points at a missing parent"
                    );
                }
            }
        }

        sort_subcategories(&mut subcategories);
        Ok(subcategories)
    }

    async fn has_subcategories(&self, category_id: Uuid) -> Result<bool, CategoryQueryError> {
        let child = CategoryEntity::find()
            .filter(CategoryColumn::ParentId.eq(category_id))
            .limit(1)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(child.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    fn category_model(name: &str, order: i16, parent_id: Option<Uuid>) -> CategoryModel {
        CategoryModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            display_order: order,
            parent_id,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn top_level_maps_rows() {
        let electronics = category_model("Electronics", 0, None);
        let vehicles = category_model("Vehicles", 1, None);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![electronics.clone(), vehicles.clone()]])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        let top = query.top_level().await.unwrap();

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Electronics");
        assert_eq!(top[1].name, "Vehicles");
    }

    #[tokio::test]
    async fn subcategories_are_paired_with_parents_and_sorted() {
        let electronics = category_model("Electronics", 0, None);
        let vehicles = category_model("Vehicles", 1, None);

        let cars = category_model("Cars", 0, Some(vehicles.id));
        let phones = category_model("Phones", 0, Some(electronics.id));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // first query: parents, second query: children
            .append_query_results(vec![
                vec![electronics.clone(), vehicles.clone()],
                vec![cars.clone(), phones.clone()],
            ])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        let subs = query.subcategories().await.unwrap();

        let names: Vec<String> = subs.iter().map(|s| s.display_name()).collect();
        assert_eq!(names, ["Electronics - Phones", "Vehicles - Cars"]);
    }

    #[tokio::test]
    async fn a_row_is_in_exactly_one_view() {
        let electronics = category_model("Electronics", 0, None);
        let phones = category_model("Phones", 0, Some(electronics.id));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // top_level query
            .append_query_results(vec![vec![electronics.clone()]])
            // subcategories: parents, then children
            .append_query_results(vec![
                vec![electronics.clone()],
                vec![phones.clone()],
            ])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        let top = query.top_level().await.unwrap();
        let subs = query.subcategories().await.unwrap();

        assert!(top.iter().any(|c| c.id == electronics.id));
        assert!(top.iter().all(|c| c.id != phones.id));
        assert!(subs.iter().any(|s| s.id == phones.id));
        assert!(subs.iter().all(|s| s.id != electronics.id));
    }

    #[tokio::test]
    async fn has_subcategories_true_and_false() {
        let parent = category_model("Electronics", 0, None);
        let child = category_model("Phones", 0, Some(parent.id));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![child.clone()], Vec::<CategoryModel>::new()])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        assert!(query.has_subcategories(parent.id).await.unwrap());
        assert!(!query.has_subcategories(parent.id).await.unwrap());
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        let result = query.top_level().await;

        assert!(matches!(
            result,
            Err(CategoryQueryError::DatabaseError(_))
        ));
    }
}
