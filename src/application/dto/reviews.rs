use crate::domain::review::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// `title` and `author` are pinned by the server and read-only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i64,
    pub title: i64,
    pub author: String,
    pub text: String,
    pub score: u8,
    #[serde(with = "serde_time")]
    pub pub_date: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.into(),
            title: review.title_id.into(),
            author: review.author.username.into(),
            text: review.text.into_inner(),
            score: review.score.value(),
            pub_date: review.pub_date,
        }
    }
}

/// Client-writable review fields. Any `title`/`author` in the body is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReviewWriteDto {
    pub text: String,
    pub score: i64,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReviewPatchDto {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
}
