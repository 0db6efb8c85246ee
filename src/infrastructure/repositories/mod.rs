// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_catalog;
mod postgres_comment;
mod postgres_review;
mod postgres_title;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_catalog::PostgresCatalogRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_review::PostgresReviewRepository;
pub use postgres_title::PostgresTitleRepository;
pub use postgres_user::PostgresUserRepository;
