// src/application/queries/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentId, CommentRepository},
        review::{ReviewId, ReviewRepository},
        title::TitleId,
    },
};

pub struct ListCommentsQuery {
    pub title_id: i64,
    pub review_id: i64,
}

pub struct GetCommentQuery {
    pub title_id: i64,
    pub review_id: i64,
    pub comment_id: i64,
}

pub struct CommentQueryService {
    comments: Arc<dyn CommentRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl CommentQueryService {
    pub fn new(comments: Arc<dyn CommentRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { comments, reviews }
    }

    async fn review_in_title(&self, title_id: i64, review_id: i64) -> ApplicationResult<ReviewId> {
        let title_id = TitleId::new(title_id)?;
        let review_id = ReviewId::new(review_id)?;
        self.reviews
            .find_by_id(title_id, review_id)
            .await?
            .map(|review| review.id)
            .ok_or_else(|| ApplicationError::not_found("review not found"))
    }

    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let review_id = self.review_in_title(query.title_id, query.review_id).await?;
        let comments = self.comments.list_by_review(review_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn get_comment(&self, query: GetCommentQuery) -> ApplicationResult<CommentDto> {
        let review_id = self.review_in_title(query.title_id, query.review_id).await?;
        let comment_id = CommentId::new(query.comment_id)?;
        self.comments
            .find_by_id(review_id, comment_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }
}
