pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::categories;
pub use modules::comments;
pub use modules::email;
pub use modules::listings;
pub use modules::users;

use crate::categories::adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres};
use crate::categories::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetSubcategoriesUseCase,
    GetTopLevelCategoriesUseCase,
};
use crate::categories::application::services::{
    CreateCategoryService, DeleteCategoryService, GetSubcategoriesService,
    GetTopLevelCategoriesService,
};
use crate::comments::adapter::outgoing::CommentRepositoryPostgres;
use crate::comments::application::ports::incoming::use_cases::{
    CreateCommentUseCase, GetCommentsUseCase, UpdateCommentUseCase,
};
use crate::comments::application::services::{
    CreateCommentService, GetCommentsService, UpdateCommentService,
};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::CommentNotifier;
use crate::email::application::services::CommentEmailService;
use crate::listings::adapter::outgoing::{
    GcsImageStore, ImageRepositoryPostgres, ListingQueryPostgres, ListingRepositoryPostgres,
};
use crate::listings::application::ports::incoming::use_cases::{
    AddListingImageUseCase, CreateListingUseCase, DeleteListingUseCase, GetListingsUseCase,
    GetSingleListingUseCase,
};
use crate::listings::application::services::{
    AddListingImageService, CreateListingService, DeleteListingService, GetListingsService,
    GetSingleListingService,
};
use crate::users::adapter::outgoing::UserRepositoryPostgres;
use crate::users::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetUserProfileUseCase, RegisterUserUseCase,
};
use crate::users::application::services::{
    DeleteUserService, GetUserProfileService, RegisterUserService,
};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_top_level_categories: Arc<dyn GetTopLevelCategoriesUseCase + Send + Sync>,
    pub get_subcategories: Arc<dyn GetSubcategoriesUseCase + Send + Sync>,
    pub create_category: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub delete_category: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
    pub register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub get_user_profile: Arc<dyn GetUserProfileUseCase + Send + Sync>,
    pub delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub create_listing: Arc<dyn CreateListingUseCase + Send + Sync>,
    pub get_listings: Arc<dyn GetListingsUseCase + Send + Sync>,
    pub get_single_listing: Arc<dyn GetSingleListingUseCase + Send + Sync>,
    pub add_listing_image: Arc<dyn AddListingImageUseCase + Send + Sync>,
    pub delete_listing: Arc<dyn DeleteListingUseCase + Send + Sync>,
    pub create_comment: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub get_comments: Arc<dyn GetCommentsUseCase + Send + Sync>,
    pub update_comment: Arc<dyn UpdateCommentUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let image_bucket = env::var("IMAGE_BUCKET").expect("IMAGE_BUCKET is not set in .env file");

    // SMTP SETUPS
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if std::env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    info!("Running database migrations...");
    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");
    info!("Database migrations completed");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db_arc));
    let listing_repo = ListingRepositoryPostgres::new(Arc::clone(&db_arc));
    let listing_query = ListingQueryPostgres::new(Arc::clone(&db_arc));
    let image_repo = ImageRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let image_store = GcsImageStore::new(image_bucket);

    // Category use cases
    let get_top_level_categories = GetTopLevelCategoriesService::new(category_query.clone());
    let get_subcategories = GetSubcategoriesService::new(category_query.clone());
    let create_category = CreateCategoryService::new(category_repo.clone());
    let delete_category = DeleteCategoryService::new(
        category_repo.clone(),
        category_query.clone(),
        listing_query.clone(),
    );

    // Listing use cases; deletion is shared with the user cascade
    let create_listing = CreateListingService::new(
        listing_repo.clone(),
        category_repo.clone(),
        user_repo.clone(),
        image_store.clone(),
    );
    let get_listings = GetListingsService::new(listing_query.clone());
    let get_single_listing = GetSingleListingService::new(
        listing_repo.clone(),
        image_repo.clone(),
        image_store.clone(),
    );
    let add_listing_image = AddListingImageService::new(
        listing_repo.clone(),
        image_repo.clone(),
        image_store.clone(),
    );
    let delete_listing: Arc<dyn DeleteListingUseCase + Send + Sync> =
        Arc::new(DeleteListingService::new(
            listing_repo.clone(),
            image_repo.clone(),
            image_store.clone(),
        ));

    // User use cases
    let register_user = RegisterUserService::new(user_repo.clone());
    let get_user_profile = GetUserProfileService::new(user_repo.clone());
    let delete_user = DeleteUserService::new(
        user_repo.clone(),
        listing_repo.clone(),
        Arc::clone(&delete_listing),
    );

    // Comment use cases; the notifier is injected explicitly
    let comment_notifier: Arc<dyn CommentNotifier + Send + Sync> =
        Arc::new(CommentEmailService::new(Arc::new(smtp_sender)));
    let create_comment = CreateCommentService::new(
        comment_repo.clone(),
        listing_repo.clone(),
        user_repo.clone(),
        Arc::clone(&comment_notifier),
    );
    let get_comments = GetCommentsService::new(comment_repo.clone());
    let update_comment = UpdateCommentService::new(comment_repo.clone());

    let state = AppState {
        get_top_level_categories: Arc::new(get_top_level_categories),
        get_subcategories: Arc::new(get_subcategories),
        create_category: Arc::new(create_category),
        delete_category: Arc::new(delete_category),
        register_user: Arc::new(register_user),
        get_user_profile: Arc::new(get_user_profile),
        delete_user: Arc::new(delete_user),
        create_listing: Arc::new(create_listing),
        get_listings: Arc::new(get_listings),
        get_single_listing: Arc::new(get_single_listing),
        add_listing_image: Arc::new(add_listing_image),
        delete_listing,
        create_comment: Arc::new(create_comment),
        get_comments: Arc::new(get_comments),
        update_comment: Arc::new(update_comment),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(shared::api::json_config::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Categories
    cfg.service(crate::categories::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::categories::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::categories::adapter::incoming::web::routes::delete_category_handler);
    // Users
    cfg.service(crate::users::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::get_user_profile_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::delete_user_handler);
    // Listings
    cfg.service(crate::listings::adapter::incoming::web::routes::get_listings_handler);
    cfg.service(crate::listings::adapter::incoming::web::routes::get_single_listing_handler);
    cfg.service(crate::listings::adapter::incoming::web::routes::create_listing_handler);
    cfg.service(crate::listings::adapter::incoming::web::routes::delete_listing_handler);
    cfg.service(crate::listings::adapter::incoming::web::routes::add_listing_image_handler);
    // Comments
    cfg.service(crate::comments::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::comments::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::comments::adapter::incoming::web::routes::update_comment_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
