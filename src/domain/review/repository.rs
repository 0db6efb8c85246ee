use crate::domain::errors::DomainResult;
use crate::domain::review::entity::{NewReview, Review, ReviewUpdate};
use crate::domain::review::value_objects::ReviewId;
use crate::domain::title::TitleId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Whether `author` already reviewed `title_id`.
    async fn exists_for(&self, author: UserId, title_id: TitleId) -> DomainResult<bool>;

    async fn insert(&self, review: NewReview) -> DomainResult<Review>;

    async fn update(&self, update: ReviewUpdate) -> DomainResult<Review>;

    async fn delete(&self, id: ReviewId) -> DomainResult<()>;

    /// Looks a review up within the title it belongs to.
    async fn find_by_id(&self, title_id: TitleId, id: ReviewId) -> DomainResult<Option<Review>>;

    async fn list_by_title(&self, title_id: TitleId) -> DomainResult<Vec<Review>>;
}
