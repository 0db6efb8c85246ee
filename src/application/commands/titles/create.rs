// src/application/commands/titles/create.rs
use super::TitleCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, TitleReadDto, TitleWriteDto},
        error::ApplicationResult,
    },
    domain::title::{NewTitle, TitleName},
};

impl TitleCommandService {
    /// Accepts the write representation and answers with the read one.
    pub async fn create_title(
        &self,
        actor: &AuthenticatedUser,
        payload: TitleWriteDto,
    ) -> ApplicationResult<TitleReadDto> {
        ensure_capability(actor, "titles", "manage")?;

        let name = TitleName::new(payload.name)?;
        let year = self.release_year(payload.year)?;
        let category = self.codec.resolve_category(&payload.category).await?;
        let genres = self.codec.resolve_genres(&payload.genre).await?;

        let created = self
            .write_repo
            .insert(NewTitle {
                name,
                year,
                description: payload.description,
                category,
                genres,
            })
            .await?;

        tracing::info!(title_id = %created.id, "title created");
        Ok(created.into())
    }
}
