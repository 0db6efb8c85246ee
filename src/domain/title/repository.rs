use crate::domain::errors::DomainResult;
use crate::domain::title::entity::{NewTitle, Title, TitleFilter, TitleUpdate};
use crate::domain::title::value_objects::TitleId;
use async_trait::async_trait;

#[async_trait]
pub trait TitleWriteRepository: Send + Sync {
    async fn insert(&self, title: NewTitle) -> DomainResult<Title>;
    async fn update(&self, update: TitleUpdate) -> DomainResult<Title>;
    async fn delete(&self, id: TitleId) -> DomainResult<()>;
}

/// Read side. Returned titles carry their derived `rating`.
#[async_trait]
pub trait TitleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TitleId) -> DomainResult<Option<Title>>;
    async fn list(&self, filter: &TitleFilter) -> DomainResult<Vec<Title>>;
}
