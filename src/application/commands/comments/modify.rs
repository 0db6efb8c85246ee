// src/application/commands/comments/modify.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto, CommentWriteDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{CommentText, CommentUpdate, specifications::CanModifyCommentSpec},
};

pub struct UpdateCommentCommand {
    pub title_id: i64,
    pub review_id: i64,
    pub comment_id: i64,
    pub payload: CommentWriteDto,
}

pub struct DeleteCommentCommand {
    pub title_id: i64,
    pub review_id: i64,
    pub comment_id: i64,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let comment = self
            .existing_comment(command.title_id, command.review_id, command.comment_id)
            .await?;

        if !CanModifyCommentSpec::for_update(&actor.capabilities, &comment, actor.id).is_satisfied()
        {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update comment",
            ));
        }

        let text = CommentText::new(command.payload.text)?;
        let updated = self
            .comments
            .update(CommentUpdate {
                id: comment.id,
                text,
            })
            .await?;
        Ok(updated.into())
    }

    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let comment = self
            .existing_comment(command.title_id, command.review_id, command.comment_id)
            .await?;

        if !CanModifyCommentSpec::for_delete(&actor.capabilities, &comment, actor.id).is_satisfied()
        {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete comment",
            ));
        }

        self.comments.delete(comment.id).await?;
        Ok(())
    }
}
