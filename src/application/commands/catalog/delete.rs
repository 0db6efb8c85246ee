// src/application/commands/catalog/delete.rs
use super::CatalogCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{CatalogEntry, CatalogRepository, Slug},
};

pub struct DeleteCatalogEntryCommand {
    pub slug: String,
}

impl CatalogCommandService {
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCatalogEntryCommand,
    ) -> ApplicationResult<()> {
        delete_entry(self.categories.as_ref(), actor, command).await
    }

    pub async fn delete_genre(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCatalogEntryCommand,
    ) -> ApplicationResult<()> {
        delete_entry(self.genres.as_ref(), actor, command).await
    }
}

async fn delete_entry<T: CatalogEntry>(
    repo: &dyn CatalogRepository<T>,
    actor: &AuthenticatedUser,
    command: DeleteCatalogEntryCommand,
) -> ApplicationResult<()> {
    ensure_capability(actor, "catalog", "manage")?;

    let not_found = || ApplicationError::not_found(format!("{} not found", T::KIND.field()));
    let slug = Slug::new(command.slug).map_err(|_| not_found())?;
    if repo.find_by_slug(&slug).await?.is_none() {
        return Err(not_found());
    }

    repo.delete_by_slug(&slug).await?;
    tracing::info!(kind = T::KIND.field(), %slug, "catalog entry deleted");
    Ok(())
}
