// src/application/queries/reviews.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ReviewDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        review::{ReviewId, ReviewRepository},
        title::{TitleId, TitleReadRepository},
    },
};

pub struct ListReviewsQuery {
    pub title_id: i64,
}

pub struct GetReviewQuery {
    pub title_id: i64,
    pub review_id: i64,
}

pub struct ReviewQueryService {
    reviews: Arc<dyn ReviewRepository>,
    titles: Arc<dyn TitleReadRepository>,
}

impl ReviewQueryService {
    pub fn new(reviews: Arc<dyn ReviewRepository>, titles: Arc<dyn TitleReadRepository>) -> Self {
        Self { reviews, titles }
    }

    pub async fn list_reviews(&self, query: ListReviewsQuery) -> ApplicationResult<Vec<ReviewDto>> {
        let title_id = TitleId::new(query.title_id)?;
        if self.titles.find_by_id(title_id).await?.is_none() {
            return Err(ApplicationError::not_found("title not found"));
        }
        let reviews = self.reviews.list_by_title(title_id).await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    pub async fn get_review(&self, query: GetReviewQuery) -> ApplicationResult<ReviewDto> {
        let title_id = TitleId::new(query.title_id)?;
        let review_id = ReviewId::new(query.review_id)?;
        self.reviews
            .find_by_id(title_id, review_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("review not found"))
    }
}
