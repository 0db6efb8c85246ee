// src/application/references.rs
use std::sync::Arc;

use crate::application::{
    dto::ReferenceDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::catalog::{CatalogEntry, CatalogRepository, Category, Genre, Slug};

/// Translates between slug strings supplied by clients and stored
/// category/genre references.
///
/// Resolution only reads: an unknown slug yields
/// [`ApplicationError::InvalidReference`] naming the offending field.
pub struct SlugReferenceCodec {
    categories: Arc<dyn CatalogRepository<Category>>,
    genres: Arc<dyn CatalogRepository<Genre>>,
}

impl SlugReferenceCodec {
    pub fn new(
        categories: Arc<dyn CatalogRepository<Category>>,
        genres: Arc<dyn CatalogRepository<Genre>>,
    ) -> Self {
        Self { categories, genres }
    }

    pub async fn resolve_category(&self, slug: &str) -> ApplicationResult<Category> {
        resolve_one(self.categories.as_ref(), slug).await
    }

    /// Resolves every genre slug, preserving order and dropping repeats.
    pub async fn resolve_genres(&self, slugs: &[String]) -> ApplicationResult<Vec<Genre>> {
        let mut genres: Vec<Genre> = Vec::with_capacity(slugs.len());
        for slug in slugs {
            let genre = resolve_one(self.genres.as_ref(), slug).await?;
            if !genres.iter().any(|g| g.slug == genre.slug) {
                genres.push(genre);
            }
        }
        Ok(genres)
    }

    /// Read direction: nested `{slug, name}` object.
    pub fn render<T: CatalogEntry>(entry: &T) -> ReferenceDto {
        ReferenceDto::from_entry(entry)
    }
}

async fn resolve_one<T: CatalogEntry>(
    repo: &dyn CatalogRepository<T>,
    raw: &str,
) -> ApplicationResult<T> {
    let field = T::KIND.field();
    // A malformed slug can never match a stored one.
    let slug = Slug::new(raw).map_err(|_| ApplicationError::invalid_reference(field, raw))?;
    repo.find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApplicationError::invalid_reference(field, raw))
}
