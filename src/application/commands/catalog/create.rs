// src/application/commands/catalog/create.rs
use super::CatalogCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto, GenreDto, ReferenceDto},
        error::{ApplicationError, ApplicationResult},
        references::SlugReferenceCodec,
    },
    domain::catalog::{CatalogEntry, CatalogName, CatalogRepository, NewCatalogEntry, Slug},
};

pub struct CreateCatalogEntryCommand {
    pub name: String,
    pub slug: Option<String>,
}

impl CatalogCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCatalogEntryCommand,
    ) -> ApplicationResult<CategoryDto> {
        self.create_entry(self.categories.as_ref(), actor, command)
            .await
    }

    pub async fn create_genre(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCatalogEntryCommand,
    ) -> ApplicationResult<GenreDto> {
        self.create_entry(self.genres.as_ref(), actor, command).await
    }

    async fn create_entry<T: CatalogEntry>(
        &self,
        repo: &dyn CatalogRepository<T>,
        actor: &AuthenticatedUser,
        command: CreateCatalogEntryCommand,
    ) -> ApplicationResult<ReferenceDto> {
        ensure_capability(actor, "catalog", "manage")?;

        let name = CatalogName::new(command.name)?;
        let slug = match command.slug {
            Some(raw) => Slug::new(raw)?,
            None => Slug::new(self.slugger.slugify(name.as_str())).map_err(|_| {
                ApplicationError::validation("slug cannot be derived from name, provide one")
            })?,
        };

        if repo.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "{} with slug '{slug}' already exists",
                T::KIND.field()
            )));
        }

        let created = repo.insert(NewCatalogEntry { slug, name }).await?;
        tracing::info!(kind = T::KIND.field(), slug = %created.slug(), "catalog entry created");
        Ok(SlugReferenceCodec::render(&created))
    }
}
