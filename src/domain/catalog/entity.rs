// src/domain/catalog/entity.rs
use crate::domain::catalog::value_objects::{CatalogName, CategoryId, GenreId, Slug};
use crate::domain::errors::DomainResult;

/// Which reference table a catalog entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Category,
    Genre,
}

impl CatalogKind {
    /// Name of the title field that references this kind of entry.
    pub const fn field(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Genre => "genre",
        }
    }
}

/// Reference data addressed externally by slug.
///
/// Category and Genre share storage shape and resolution rules; only the
/// cardinality of the title association differs.
pub trait CatalogEntry: Clone + Send + Sync + 'static {
    const KIND: CatalogKind;

    fn from_parts(id: i64, slug: Slug, name: CatalogName) -> DomainResult<Self>;
    fn surrogate_id(&self) -> i64;
    fn slug(&self) -> &Slug;
    fn name(&self) -> &CatalogName;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub slug: Slug,
    pub name: CatalogName,
}

impl CatalogEntry for Category {
    const KIND: CatalogKind = CatalogKind::Category;

    fn from_parts(id: i64, slug: Slug, name: CatalogName) -> DomainResult<Self> {
        Ok(Self {
            id: CategoryId::new(id)?,
            slug,
            name,
        })
    }

    fn surrogate_id(&self) -> i64 {
        self.id.into()
    }

    fn slug(&self) -> &Slug {
        &self.slug
    }

    fn name(&self) -> &CatalogName {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: GenreId,
    pub slug: Slug,
    pub name: CatalogName,
}

impl CatalogEntry for Genre {
    const KIND: CatalogKind = CatalogKind::Genre;

    fn from_parts(id: i64, slug: Slug, name: CatalogName) -> DomainResult<Self> {
        Ok(Self {
            id: GenreId::new(id)?,
            slug,
            name,
        })
    }

    fn surrogate_id(&self) -> i64 {
        self.id.into()
    }

    fn slug(&self) -> &Slug {
        &self.slug
    }

    fn name(&self) -> &CatalogName {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct NewCatalogEntry {
    pub slug: Slug,
    pub name: CatalogName,
}
