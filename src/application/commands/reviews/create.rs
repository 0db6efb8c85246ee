// src/application/commands/reviews/create.rs
use super::ReviewCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, ReviewDto, ReviewWriteDto},
        error::ApplicationResult,
    },
    domain::review::{NewReview, ReviewText, Score},
};

/// `title_id` is taken from the route; the author is always the actor.
pub struct CreateReviewCommand {
    pub title_id: i64,
    pub payload: ReviewWriteDto,
}

impl ReviewCommandService {
    pub async fn create_review(
        &self,
        actor: &AuthenticatedUser,
        command: CreateReviewCommand,
    ) -> ApplicationResult<ReviewDto> {
        ensure_capability(actor, "reviews", "create")?;

        let title_id = self.existing_title(command.title_id).await?;
        let text = ReviewText::new(command.payload.text)?;
        let score = Score::new(command.payload.score)?;

        self.guard.validate_create(actor.id, title_id).await?;

        let created = self
            .reviews
            .insert(NewReview {
                title_id,
                author_id: actor.id,
                text,
                score,
                pub_date: self.clock.now(),
            })
            .await?;

        tracing::info!(review_id = %created.id, %title_id, author = %actor.id, "review created");
        Ok(created.into())
    }
}
