use async_trait::async_trait;

use crate::users::application::ports::{
    incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
    outgoing::{CreateUserData, UserRepository, UserRepositoryError, UserResult},
};

#[derive(Debug, Clone)]
pub struct RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserResult, RegisterUserError> {
        let data = CreateUserData {
            username: command.username().to_string(),
            email: command.email().to_string(),
            // Activation is handled by the external registration flow; data
            // created here starts out active.
            is_activated: true,
            send_messages: command.send_messages(),
        };

        self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::application::ports::incoming::use_cases::RegisterUserCommandError;
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockUserRepository {
        result: Result<UserResult, UserRepositoryError>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(
            &self,
            _data: CreateUserData,
        ) -> Result<UserResult, UserRepositoryError> {
            self.result.clone()
        }

        async fn find_user_by_id(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<UserResult>, UserRepositoryError> {
            unimplemented!()
        }

        async fn delete_user_row(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }
    }

    fn registered() -> UserResult {
        UserResult {
            id: Uuid::new_v4(),
            username: "seller01".to_string(),
            email: "seller@example.com".to_string(),
            is_activated: true,
            send_messages: true,
        }
    }

    #[tokio::test]
    async fn registers_a_valid_user() {
        let service = RegisterUserService::new(MockUserRepository {
            result: Ok(registered()),
        });

        let command = RegisterUserCommand::new(
            "seller01".to_string(),
            "seller@example.com".to_string(),
            true,
        )
        .unwrap();

        let result = service.execute(command).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().username, "seller01");
    }

    #[tokio::test]
    async fn maps_existing_user() {
        let service = RegisterUserService::new(MockUserRepository {
            result: Err(UserRepositoryError::UserAlreadyExists),
        });

        let command = RegisterUserCommand::new(
            "seller01".to_string(),
            "seller@example.com".to_string(),
            true,
        )
        .unwrap();

        let result = service.execute(command).await;

        assert!(matches!(result, Err(RegisterUserError::UserAlreadyExists)));
    }

    #[test]
    fn command_rejects_bad_usernames_and_emails() {
        assert!(matches!(
            RegisterUserCommand::new("ab".to_string(), "a@example.com".to_string(), true),
            Err(RegisterUserCommandError::InvalidUsername)
        ));
        assert!(matches!(
            RegisterUserCommand::new("seller 01".to_string(), "a@example.com".to_string(), true),
            Err(RegisterUserCommandError::InvalidUsername)
        ));
        assert!(matches!(
            RegisterUserCommand::new("seller01".to_string(), "not-an-email".to_string(), true),
            Err(RegisterUserCommandError::InvalidEmail)
        ));
    }
}
