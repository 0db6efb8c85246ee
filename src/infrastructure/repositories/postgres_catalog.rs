// src/infrastructure/repositories/postgres_catalog.rs
use super::map_sqlx;
use crate::domain::catalog::{
    CatalogEntry, CatalogKind, CatalogName, CatalogRepository, NewCatalogEntry, Slug,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::marker::PhantomData;

/// One repository type serves both reference tables; the table is picked
/// from `T::KIND`.
pub struct PostgresCatalogRepository<T> {
    pool: PgPool,
    _entry: PhantomData<fn() -> T>,
}

impl<T> Clone for PostgresCatalogRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entry: PhantomData,
        }
    }
}

impl<T: CatalogEntry> PostgresCatalogRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entry: PhantomData,
        }
    }

    fn table() -> &'static str {
        match T::KIND {
            CatalogKind::Category => "categories",
            CatalogKind::Genre => "genres",
        }
    }
}

#[derive(Debug, FromRow)]
struct CatalogRow {
    id: i64,
    slug: String,
    name: String,
}

impl CatalogRow {
    fn into_entry<T: CatalogEntry>(self) -> DomainResult<T> {
        T::from_parts(self.id, Slug::new(self.slug)?, CatalogName::new(self.name)?)
    }
}

#[async_trait]
impl<T: CatalogEntry> CatalogRepository<T> for PostgresCatalogRepository<T> {
    async fn insert(&self, entry: NewCatalogEntry) -> DomainResult<T> {
        let sql = format!(
            "INSERT INTO {} (slug, name) VALUES ($1, $2) RETURNING id, slug, name",
            Self::table()
        );
        let row = sqlx::query_as::<_, CatalogRow>(&sql)
            .bind(entry.slug.as_str())
            .bind(entry.name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.into_entry()
    }

    async fn delete_by_slug(&self, slug: &Slug) -> DomainResult<()> {
        let sql = format!("DELETE FROM {} WHERE slug = $1", Self::table());
        let result = sqlx::query(&sql)
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "{} not found",
                T::KIND.field()
            )));
        }
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<T>> {
        let sql = format!("SELECT id, slug, name FROM {} WHERE slug = $1", Self::table());
        let row = sqlx::query_as::<_, CatalogRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(CatalogRow::into_entry).transpose()
    }

    async fn list(&self, search: Option<&str>) -> DomainResult<Vec<T>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT id, slug, name FROM ");
        qb.push(Self::table());
        if let Some(term) = search {
            qb.push(" WHERE name ILIKE ");
            qb.push_bind(format!("%{}%", escape_like(term)));
        }
        qb.push(" ORDER BY name, id");

        let rows = qb
            .build_query_as::<CatalogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(CatalogRow::into_entry).collect()
    }
}

pub(super) fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
