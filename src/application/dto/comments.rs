use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub review: i64,
    pub author: String,
    pub text: String,
    #[serde(with = "serde_time")]
    pub pub_date: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            review: comment.review_id.into(),
            author: comment.author.username.into(),
            text: comment.text.into_inner(),
            pub_date: comment.pub_date,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommentWriteDto {
    pub text: String,
}
