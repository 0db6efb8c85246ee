use super::CatalogQueryService;
use crate::{
    application::{
        dto::{CategoryDto, GenreDto, ReferenceDto},
        error::ApplicationResult,
        references::SlugReferenceCodec,
    },
    domain::catalog::{CatalogEntry, CatalogRepository},
};

#[derive(Debug, Default)]
pub struct ListCatalogQuery {
    pub search: Option<String>,
}

impl CatalogQueryService {
    pub async fn list_categories(
        &self,
        query: ListCatalogQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        list_entries(self.categories.as_ref(), query).await
    }

    pub async fn list_genres(&self, query: ListCatalogQuery) -> ApplicationResult<Vec<GenreDto>> {
        list_entries(self.genres.as_ref(), query).await
    }
}

async fn list_entries<T: CatalogEntry>(
    repo: &dyn CatalogRepository<T>,
    query: ListCatalogQuery,
) -> ApplicationResult<Vec<ReferenceDto>> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let entries = repo.list(search).await?;
    Ok(entries.iter().map(SlugReferenceCodec::render).collect())
}
