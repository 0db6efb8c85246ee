// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CommentDto, CommentWriteDto},
        error::ApplicationResult,
    },
    domain::comment::{CommentText, NewComment},
};

/// `review_id` is taken from the route; the author is always the actor.
pub struct CreateCommentCommand {
    pub title_id: i64,
    pub review_id: i64,
    pub payload: CommentWriteDto,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_capability(actor, "comments", "create")?;

        let review_id = self
            .existing_review(command.title_id, command.review_id)
            .await?;
        let text = CommentText::new(command.payload.text)?;

        let created = self
            .comments
            .insert(NewComment {
                review_id,
                author_id: actor.id,
                text,
                pub_date: self.clock.now(),
            })
            .await?;

        Ok(created.into())
    }
}
