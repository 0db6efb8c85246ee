// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            catalog::CatalogCommandService, comments::CommentCommandService,
            reviews::ReviewCommandService, titles::TitleCommandService,
            users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            catalog::CatalogQueryService, comments::CommentQueryService,
            reviews::ReviewQueryService, titles::TitleQueryService, users::UserQueryService,
        },
        references::SlugReferenceCodec,
    },
    domain::{
        catalog::{CatalogRepository, Category, Genre},
        comment::CommentRepository,
        review::{ReviewRepository, ReviewUniquenessGuard},
        title::{TitleReadRepository, TitleWriteRepository},
        user::UserRepository,
    },
};

/// Storage adapters the application layer is assembled from.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CatalogRepository<Category>>,
    pub genres: Arc<dyn CatalogRepository<Genre>>,
    pub title_write: Arc<dyn TitleWriteRepository>,
    pub title_read: Arc<dyn TitleReadRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub catalog_commands: Arc<CatalogCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub title_commands: Arc<TitleCommandService>,
    pub title_queries: Arc<TitleQueryService>,
    pub review_commands: Arc<ReviewCommandService>,
    pub review_queries: Arc<ReviewQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&repos.users)));

        let catalog_commands = Arc::new(CatalogCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.genres),
            slugger,
        ));
        let catalog_queries = Arc::new(CatalogQueryService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.genres),
        ));

        let codec = Arc::new(SlugReferenceCodec::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.genres),
        ));
        let title_commands = Arc::new(TitleCommandService::new(
            Arc::clone(&repos.title_write),
            Arc::clone(&repos.title_read),
            codec,
            Arc::clone(&clock),
        ));
        let title_queries = Arc::new(TitleQueryService::new(Arc::clone(&repos.title_read)));

        let guard = Arc::new(ReviewUniquenessGuard::new(Arc::clone(&repos.reviews)));
        let review_commands = Arc::new(ReviewCommandService::new(
            Arc::clone(&repos.reviews),
            Arc::clone(&repos.title_read),
            guard,
            Arc::clone(&clock),
        ));
        let review_queries = Arc::new(ReviewQueryService::new(
            Arc::clone(&repos.reviews),
            Arc::clone(&repos.title_read),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.reviews),
            clock,
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.reviews),
        ));

        Self {
            user_commands,
            user_queries,
            catalog_commands,
            catalog_queries,
            title_commands,
            title_queries,
            review_commands,
            review_queries,
            comment_commands,
            comment_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
