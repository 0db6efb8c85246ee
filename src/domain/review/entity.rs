// src/domain/review/entity.rs
use crate::domain::review::value_objects::{ReviewId, ReviewText, Score};
use crate::domain::title::TitleId;
use crate::domain::user::{Author, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub title_id: TitleId,
    pub author: Author,
    pub text: ReviewText,
    pub score: Score,
    pub pub_date: DateTime<Utc>,
}

/// A review about to be stored. `title_id` and `author_id` come from the
/// request route and the authenticated identity, never from the body.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub title_id: TitleId,
    pub author_id: UserId,
    pub text: ReviewText,
    pub score: Score,
    pub pub_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub id: ReviewId,
    pub text: Option<ReviewText>,
    pub score: Option<Score>,
}

impl ReviewUpdate {
    pub const fn new(id: ReviewId) -> Self {
        Self {
            id,
            text: None,
            score: None,
        }
    }

    pub fn with_text(mut self, text: ReviewText) -> Self {
        self.text = Some(text);
        self
    }

    pub const fn with_score(mut self, score: Score) -> Self {
        self.score = Some(score);
        self
    }
}
