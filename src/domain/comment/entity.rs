// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentId, CommentText};
use crate::domain::review::ReviewId;
use crate::domain::user::{Author, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub review_id: ReviewId,
    pub author: Author,
    pub text: CommentText,
    pub pub_date: DateTime<Utc>,
}

/// `review_id` comes from the route and `author_id` from the authenticated
/// identity.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub review_id: ReviewId,
    pub author_id: UserId,
    pub text: CommentText,
    pub pub_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub text: CommentText,
}
