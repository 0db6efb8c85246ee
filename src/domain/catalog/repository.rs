use crate::domain::catalog::entity::{CatalogEntry, NewCatalogEntry};
use crate::domain::catalog::value_objects::Slug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogRepository<T: CatalogEntry>: Send + Sync {
    async fn insert(&self, entry: NewCatalogEntry) -> DomainResult<T>;
    async fn delete_by_slug(&self, slug: &Slug) -> DomainResult<()>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<T>>;
    /// Entries ordered by name; `search` filters by case-insensitive name substring.
    async fn list(&self, search: Option<&str>) -> DomainResult<Vec<T>>;
}
