// src/application/commands/reviews/update.rs
use super::ReviewCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReviewDto, ReviewPatchDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::review::{ReviewText, ReviewUpdate, Score, specifications::CanModifyReviewSpec},
};

pub struct UpdateReviewCommand {
    pub title_id: i64,
    pub review_id: i64,
    pub patch: ReviewPatchDto,
}

impl ReviewCommandService {
    pub async fn update_review(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateReviewCommand,
    ) -> ApplicationResult<ReviewDto> {
        let review = self
            .existing_review(command.title_id, command.review_id)
            .await?;

        if !CanModifyReviewSpec::for_update(&actor.capabilities, &review, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update review",
            ));
        }

        self.guard.validate_update(&review)?;

        let ReviewPatchDto { text, score } = command.patch;
        let mut update = ReviewUpdate::new(review.id);
        if let Some(text) = text {
            update = update.with_text(ReviewText::new(text)?);
        }
        if let Some(score) = score {
            update = update.with_score(Score::new(score)?);
        }

        if update.text.is_none() && update.score.is_none() {
            return Ok(review.into());
        }

        let updated = self.reviews.update(update).await?;
        Ok(updated.into())
    }
}
