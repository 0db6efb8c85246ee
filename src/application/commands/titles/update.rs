// src/application/commands/titles/update.rs
use super::TitleCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, TitlePatchDto, TitleReadDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::title::{TitleId, TitleName, TitleUpdate},
};

pub struct UpdateTitleCommand {
    pub id: i64,
    pub patch: TitlePatchDto,
}

impl TitleCommandService {
    pub async fn update_title(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTitleCommand,
    ) -> ApplicationResult<TitleReadDto> {
        ensure_capability(actor, "titles", "manage")?;

        let id = TitleId::new(command.id)?;
        let current = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("title not found"))?;

        let TitlePatchDto {
            name,
            year,
            description,
            genre,
            category,
        } = command.patch;

        let mut update = TitleUpdate::new(id);
        if let Some(name) = name {
            update = update.with_name(TitleName::new(name)?);
        }
        if let Some(year) = year {
            update = update.with_year(self.release_year(year)?);
        }
        if let Some(description) = description {
            update = update.with_description(description);
        }
        if let Some(slug) = category {
            update = update.with_category(self.codec.resolve_category(&slug).await?);
        }
        if let Some(slugs) = genre {
            update = update.with_genres(self.codec.resolve_genres(&slugs).await?);
        }

        if update.is_empty() {
            return Ok(current.into());
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
