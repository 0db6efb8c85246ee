// src/application/commands/titles/delete.rs
use super::TitleCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability, dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::title::TitleId,
};

pub struct DeleteTitleCommand {
    pub id: i64,
}

impl TitleCommandService {
    pub async fn delete_title(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteTitleCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "titles", "manage")?;
        let id = TitleId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(title_id = %id, "title deleted");
        Ok(())
    }
}
