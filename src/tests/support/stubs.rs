use async_trait::async_trait;
use uuid::Uuid;

use crate::categories::application::domain::entities::{Subcategory, TopLevelCategory};
use crate::categories::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase, DeleteCategoryError,
    DeleteCategoryUseCase, GetCategoriesError, GetSubcategoriesUseCase,
    GetTopLevelCategoriesUseCase,
};
use crate::categories::application::ports::outgoing::CategoryRecord;
use crate::comments::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError, CreateCommentUseCase, GetCommentsError,
    GetCommentsUseCase, UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase,
};
use crate::comments::application::ports::outgoing::CommentResult;
use crate::listings::application::ports::incoming::use_cases::{
    AddListingImageError, AddListingImageUseCase, CreateListingCommand, CreateListingError,
    CreateListingUseCase, DeleteListingError, DeleteListingUseCase, GetListingsError,
    GetListingsUseCase, GetSingleListingError, GetSingleListingUseCase, ImagePayload,
    ListingDetails,
};
use crate::listings::application::ports::outgoing::{ListingImageRecord, ListingResult, ListingView};
use crate::users::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase, GetUserProfileError, GetUserProfileUseCase,
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
use crate::users::application::ports::outgoing::UserResult;

// Defaults for routes a given test does not exercise: reads answer empty,
// writes answer a repository error.

const NOT_WIRED: &str = "not wired in this test";

pub struct StubGetTopLevelCategoriesUseCase {
    pub result: Vec<TopLevelCategory>,
}

impl StubGetTopLevelCategoriesUseCase {
    pub fn empty() -> Self {
        Self { result: vec![] }
    }
}

#[async_trait]
impl GetTopLevelCategoriesUseCase for StubGetTopLevelCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<TopLevelCategory>, GetCategoriesError> {
        Ok(self.result.clone())
    }
}

pub struct StubGetSubcategoriesUseCase {
    pub result: Vec<Subcategory>,
}

impl StubGetSubcategoriesUseCase {
    pub fn empty() -> Self {
        Self { result: vec![] }
    }
}

#[async_trait]
impl GetSubcategoriesUseCase for StubGetSubcategoriesUseCase {
    async fn execute(&self) -> Result<Vec<Subcategory>, GetCategoriesError> {
        Ok(self.result.clone())
    }
}

pub struct StubCreateCategoryUseCase;

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(
        &self,
        _command: CreateCategoryCommand,
    ) -> Result<CategoryRecord, CreateCategoryError> {
        Err(CreateCategoryError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteCategoryUseCase;

#[async_trait]
impl DeleteCategoryUseCase for StubDeleteCategoryUseCase {
    async fn execute(&self, _category_id: Uuid) -> Result<(), DeleteCategoryError> {
        Err(DeleteCategoryError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<UserResult, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetUserProfileUseCase;

#[async_trait]
impl GetUserProfileUseCase for StubGetUserProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserResult, GetUserProfileError> {
        Err(GetUserProfileError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCreateListingUseCase;

#[async_trait]
impl CreateListingUseCase for StubCreateListingUseCase {
    async fn execute(
        &self,
        _command: CreateListingCommand,
    ) -> Result<ListingResult, CreateListingError> {
        Err(CreateListingError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetListingsUseCase {
    pub result: Vec<ListingView>,
}

impl StubGetListingsUseCase {
    pub fn empty() -> Self {
        Self { result: vec![] }
    }
}

#[async_trait]
impl GetListingsUseCase for StubGetListingsUseCase {
    async fn execute(
        &self,
        _category_id: Option<Uuid>,
    ) -> Result<Vec<ListingView>, GetListingsError> {
        Ok(self.result.clone())
    }
}

pub struct StubGetSingleListingUseCase;

#[async_trait]
impl GetSingleListingUseCase for StubGetSingleListingUseCase {
    async fn execute(&self, _listing_id: Uuid) -> Result<ListingDetails, GetSingleListingError> {
        Err(GetSingleListingError::ListingNotFound)
    }
}

pub struct StubAddListingImageUseCase;

#[async_trait]
impl AddListingImageUseCase for StubAddListingImageUseCase {
    async fn execute(
        &self,
        _listing_id: Uuid,
        _payload: ImagePayload,
    ) -> Result<ListingImageRecord, AddListingImageError> {
        Err(AddListingImageError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteListingUseCase;

#[async_trait]
impl DeleteListingUseCase for StubDeleteListingUseCase {
    async fn execute(&self, _listing_id: Uuid) -> Result<(), DeleteListingError> {
        Err(DeleteListingError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCreateCommentUseCase;

#[async_trait]
impl CreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(
        &self,
        _command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError> {
        Err(CreateCommentError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubGetCommentsUseCase {
    pub result: Vec<CommentResult>,
}

impl StubGetCommentsUseCase {
    pub fn empty() -> Self {
        Self { result: vec![] }
    }
}

#[async_trait]
impl GetCommentsUseCase for StubGetCommentsUseCase {
    async fn execute(&self, _listing_id: Uuid) -> Result<Vec<CommentResult>, GetCommentsError> {
        Ok(self.result.clone())
    }
}

pub struct StubUpdateCommentUseCase;

#[async_trait]
impl UpdateCommentUseCase for StubUpdateCommentUseCase {
    async fn execute(
        &self,
        _command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError> {
        Err(UpdateCommentError::RepositoryError(NOT_WIRED.to_string()))
    }
}
