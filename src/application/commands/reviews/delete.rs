// src/application/commands/reviews/delete.rs
use super::ReviewCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::review::specifications::CanModifyReviewSpec,
};

pub struct DeleteReviewCommand {
    pub title_id: i64,
    pub review_id: i64,
}

impl ReviewCommandService {
    pub async fn delete_review(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteReviewCommand,
    ) -> ApplicationResult<()> {
        let review = self
            .existing_review(command.title_id, command.review_id)
            .await?;

        if !CanModifyReviewSpec::for_delete(&actor.capabilities, &review, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete review",
            ));
        }

        self.reviews.delete(review.id).await?;
        tracing::info!(review_id = %review.id, "review deleted");
        Ok(())
    }
}
