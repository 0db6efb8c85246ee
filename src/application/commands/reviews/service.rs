// src/application/commands/reviews/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        review::{Review, ReviewId, ReviewRepository, ReviewUniquenessGuard},
        title::{TitleId, TitleReadRepository},
    },
};

pub struct ReviewCommandService {
    pub(super) reviews: Arc<dyn ReviewRepository>,
    pub(super) titles: Arc<dyn TitleReadRepository>,
    pub(super) guard: Arc<ReviewUniquenessGuard>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ReviewCommandService {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        titles: Arc<dyn TitleReadRepository>,
        guard: Arc<ReviewUniquenessGuard>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reviews,
            titles,
            guard,
            clock,
        }
    }

    pub(super) async fn existing_title(&self, title_id: i64) -> ApplicationResult<TitleId> {
        let id = TitleId::new(title_id)?;
        if self.titles.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("title not found"));
        }
        Ok(id)
    }

    pub(super) async fn existing_review(
        &self,
        title_id: i64,
        review_id: i64,
    ) -> ApplicationResult<Review> {
        let title_id = TitleId::new(title_id)?;
        let review_id = ReviewId::new(review_id)?;
        self.reviews
            .find_by_id(title_id, review_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("review not found"))
    }
}
