use async_trait::async_trait;

use crate::categories::application::ports::{
    incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
    outgoing::{CategoryRecord, CategoryRepository, CategoryRepositoryError, CreateCategoryData},
};

#[derive(Debug, Clone)]
pub struct CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CategoryRecord, CreateCategoryError> {
        // A sub-category must hang off a top-level category, never off
        // another sub-category.
        if let Some(parent_id) = command.parent_id() {
            let parent = self
                .repository
                .find_category_by_id(parent_id)
                .await
                .map_err(|e| CreateCategoryError::RepositoryError(e.to_string()))?
                .ok_or(CreateCategoryError::ParentNotFound)?;

            if parent.parent_id.is_some() {
                return Err(CreateCategoryError::ParentNotTopLevel);
            }
        }

        let data = CreateCategoryData {
            name: command.name().to_string(),
            display_order: command.display_order(),
            parent_id: command.parent_id(),
        };

        self.repository
            .create_category(data)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::NameTaken => CreateCategoryError::NameTaken,
                other => CreateCategoryError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::categories::application::ports::incoming::use_cases::CreateCategoryCommandError;

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    struct MockCategoryRepository {
        find_result: Result<Option<CategoryRecord>, CategoryRepositoryError>,
        create_result: Result<CategoryRecord, CategoryRepositoryError>,
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepository {
        async fn create_category(
            &self,
            _data: CreateCategoryData,
        ) -> Result<CategoryRecord, CategoryRepositoryError> {
            self.create_result.clone()
        }

        async fn find_category_by_id(
            &self,
            _category_id: Uuid,
        ) -> Result<Option<CategoryRecord>, CategoryRepositoryError> {
            self.find_result.clone()
        }

        async fn delete_category_row(
            &self,
            _category_id: Uuid,
        ) -> Result<(), CategoryRepositoryError> {
            unimplemented!()
        }
    }

    fn record(name: &str, parent_id: Option<Uuid>) -> CategoryRecord {
        CategoryRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            display_order: 0,
            parent_id,
        }
    }

    #[tokio::test]
    async fn creates_top_level_category_without_parent_lookup() {
        let expected = record("Electronics", None);

        let repo = MockCategoryRepository {
            find_result: Err(CategoryRepositoryError::DatabaseError(
                "find should not be called".to_string(),
            )),
            create_result: Ok(expected.clone()),
        };
        let service = CreateCategoryService::new(repo);

        let command = CreateCategoryCommand::new("Electronics".to_string(), 0, None).unwrap();
        let result = service.execute(command).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn creates_subcategory_under_top_level_parent() {
        let parent = record("Electronics", None);
        let expected = record("Phones", Some(parent.id));

        let repo = MockCategoryRepository {
            find_result: Ok(Some(parent.clone())),
            create_result: Ok(expected.clone()),
        };
        let service = CreateCategoryService::new(repo);

        let command =
            CreateCategoryCommand::new("Phones".to_string(), 0, Some(parent.id)).unwrap();
        let result = service.execute(command).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().parent_id, Some(parent.id));
    }

    #[tokio::test]
    async fn rejects_missing_parent() {
        let repo = MockCategoryRepository {
            find_result: Ok(None),
            create_result: Ok(record("Phones", None)),
        };
        let service = CreateCategoryService::new(repo);

        let command =
            CreateCategoryCommand::new("Phones".to_string(), 0, Some(Uuid::new_v4())).unwrap();
        let result = service.execute(command).await;

        assert!(matches!(result, Err(CreateCategoryError::ParentNotFound)));
    }

    #[tokio::test]
    async fn rejects_parent_that_is_itself_a_subcategory() {
        let grandparent_id = Uuid::new_v4();
        let parent = record("Phones", Some(grandparent_id));

        let repo = MockCategoryRepository {
            find_result: Ok(Some(parent.clone())),
            create_result: Ok(record("Chargers", None)),
        };
        let service = CreateCategoryService::new(repo);

        let command =
            CreateCategoryCommand::new("Chargers".to_string(), 0, Some(parent.id)).unwrap();
        let result = service.execute(command).await;

        assert!(matches!(
            result,
            Err(CreateCategoryError::ParentNotTopLevel)
        ));
    }

    #[tokio::test]
    async fn maps_name_taken() {
        let repo = MockCategoryRepository {
            find_result: Ok(None),
            create_result: Err(CategoryRepositoryError::NameTaken),
        };
        let service = CreateCategoryService::new(repo);

        let command = CreateCategoryCommand::new("Electronics".to_string(), 0, None).unwrap();
        let result = service.execute(command).await;

        assert!(matches!(result, Err(CreateCategoryError::NameTaken)));
    }

    #[test]
    fn command_rejects_blank_and_oversized_names() {
        assert!(matches!(
            CreateCategoryCommand::new("   ".to_string(), 0, None),
            Err(CreateCategoryCommandError::EmptyName)
        ));
        assert!(matches!(
            CreateCategoryCommand::new("x".repeat(31), 0, None),
            Err(CreateCategoryCommandError::NameTooLong)
        ));
    }
}
