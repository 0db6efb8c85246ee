// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{Comment, CommentId, CommentRepository},
        review::{ReviewId, ReviewRepository},
        title::TitleId,
    },
};

pub struct CommentCommandService {
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) reviews: Arc<dyn ReviewRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        reviews: Arc<dyn ReviewRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comments,
            reviews,
            clock,
        }
    }

    /// The review must exist under the title named in the route.
    pub(super) async fn existing_review(
        &self,
        title_id: i64,
        review_id: i64,
    ) -> ApplicationResult<ReviewId> {
        let title_id = TitleId::new(title_id)?;
        let review_id = ReviewId::new(review_id)?;
        self.reviews
            .find_by_id(title_id, review_id)
            .await?
            .map(|review| review.id)
            .ok_or_else(|| ApplicationError::not_found("review not found"))
    }

    pub(super) async fn existing_comment(
        &self,
        title_id: i64,
        review_id: i64,
        comment_id: i64,
    ) -> ApplicationResult<Comment> {
        let review_id = self.existing_review(title_id, review_id).await?;
        let comment_id = CommentId::new(comment_id)?;
        self.comments
            .find_by_id(review_id, comment_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }
}
