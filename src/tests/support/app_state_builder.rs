use actix_web::web;
use std::sync::Arc;

use crate::categories::application::domain::entities::TopLevelCategory;
use crate::categories::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetSubcategoriesUseCase,
    GetTopLevelCategoriesUseCase,
};
use crate::comments::application::ports::incoming::use_cases::{
    CreateCommentUseCase, GetCommentsUseCase, UpdateCommentUseCase,
};
use crate::comments::application::ports::outgoing::CommentResult;
use crate::listings::application::ports::incoming::use_cases::{
    AddListingImageUseCase, CreateListingUseCase, DeleteListingUseCase, GetListingsUseCase,
    GetSingleListingUseCase,
};
use crate::listings::application::ports::outgoing::ListingView;
use crate::tests::support::stubs::*;
use crate::users::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetUserProfileUseCase, RegisterUserUseCase,
};
use crate::AppState;

pub struct TestAppStateBuilder {
    get_top_level_categories: Arc<dyn GetTopLevelCategoriesUseCase + Send + Sync>,
    get_subcategories: Arc<dyn GetSubcategoriesUseCase + Send + Sync>,
    create_category: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    delete_category: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    get_user_profile: Arc<dyn GetUserProfileUseCase + Send + Sync>,
    delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    create_listing: Arc<dyn CreateListingUseCase + Send + Sync>,
    get_listings: Arc<dyn GetListingsUseCase + Send + Sync>,
    get_single_listing: Arc<dyn GetSingleListingUseCase + Send + Sync>,
    add_listing_image: Arc<dyn AddListingImageUseCase + Send + Sync>,
    delete_listing: Arc<dyn DeleteListingUseCase + Send + Sync>,
    create_comment: Arc<dyn CreateCommentUseCase + Send + Sync>,
    get_comments: Arc<dyn GetCommentsUseCase + Send + Sync>,
    update_comment: Arc<dyn UpdateCommentUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_top_level_categories: Arc::new(StubGetTopLevelCategoriesUseCase::empty()),
            get_subcategories: Arc::new(StubGetSubcategoriesUseCase::empty()),
            create_category: Arc::new(StubCreateCategoryUseCase),
            delete_category: Arc::new(StubDeleteCategoryUseCase),
            register_user: Arc::new(StubRegisterUserUseCase),
            get_user_profile: Arc::new(StubGetUserProfileUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
            create_listing: Arc::new(StubCreateListingUseCase),
            get_listings: Arc::new(StubGetListingsUseCase::empty()),
            get_single_listing: Arc::new(StubGetSingleListingUseCase),
            add_listing_image: Arc::new(StubAddListingImageUseCase),
            delete_listing: Arc::new(StubDeleteListingUseCase),
            create_comment: Arc::new(StubCreateCommentUseCase),
            get_comments: Arc::new(StubGetCommentsUseCase::empty()),
            update_comment: Arc::new(StubUpdateCommentUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_top_level_categories_result(
        mut self,
        result: Vec<TopLevelCategory>,
    ) -> Self {
        self.get_top_level_categories =
            Arc::new(StubGetTopLevelCategoriesUseCase { result });
        self
    }

    pub fn with_get_subcategories(
        mut self,
        uc: impl GetSubcategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_subcategories = Arc::new(uc);
        self
    }

    pub fn with_create_category(
        mut self,
        uc: impl CreateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_category = Arc::new(uc);
        self
    }

    pub fn with_delete_category(
        mut self,
        uc: impl DeleteCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_category = Arc::new(uc);
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_get_user_profile(
        mut self,
        uc: impl GetUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_user_profile = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_create_listing(
        mut self,
        uc: impl CreateListingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_listing = Arc::new(uc);
        self
    }

    pub fn with_get_listings_result(mut self, result: Vec<ListingView>) -> Self {
        self.get_listings = Arc::new(StubGetListingsUseCase { result });
        self
    }

    pub fn with_get_single_listing(
        mut self,
        uc: impl GetSingleListingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_listing = Arc::new(uc);
        self
    }

    pub fn with_add_listing_image(
        mut self,
        uc: impl AddListingImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.add_listing_image = Arc::new(uc);
        self
    }

    pub fn with_delete_listing(
        mut self,
        uc: impl DeleteListingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_listing = Arc::new(uc);
        self
    }

    pub fn with_create_comment(
        mut self,
        uc: impl CreateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_comment = Arc::new(uc);
        self
    }

    pub fn with_get_comments_result(mut self, result: Vec<CommentResult>) -> Self {
        self.get_comments = Arc::new(StubGetCommentsUseCase { result });
        self
    }

    pub fn with_update_comment(
        mut self,
        uc: impl UpdateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_comment = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_top_level_categories: self.get_top_level_categories,
            get_subcategories: self.get_subcategories,
            create_category: self.create_category,
            delete_category: self.delete_category,
            register_user: self.register_user,
            get_user_profile: self.get_user_profile,
            delete_user: self.delete_user,
            create_listing: self.create_listing,
            get_listings: self.get_listings,
            get_single_listing: self.get_single_listing,
            add_listing_image: self.add_listing_image,
            delete_listing: self.delete_listing,
            create_comment: self.create_comment,
            get_comments: self.get_comments,
            update_comment: self.update_comment,
        })
    }
}
