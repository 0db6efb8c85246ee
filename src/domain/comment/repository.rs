use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::review::ReviewId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    async fn find_by_id(&self, review_id: ReviewId, id: CommentId)
    -> DomainResult<Option<Comment>>;
    async fn list_by_review(&self, review_id: ReviewId) -> DomainResult<Vec<Comment>>;
}
