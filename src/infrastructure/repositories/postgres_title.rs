// src/infrastructure/repositories/postgres_title.rs
use super::{map_sqlx, postgres_catalog::escape_like};
use crate::domain::catalog::{CatalogName, Category, CategoryId, Genre, GenreId, Slug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::title::{
    NewTitle, Rating, ReleaseYear, Title, TitleFilter, TitleId, TitleName, TitleReadRepository,
    TitleUpdate, TitleWriteRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use std::collections::HashMap;

/// Title rows with the category joined in and the rating aggregated from
/// reviews on every read.
const TITLE_SELECT: &str = "SELECT t.id, t.name, t.year, t.description,
        c.id AS category_id, c.slug AS category_slug, c.name AS category_name,
        (SELECT AVG(r.score)::float8 FROM reviews r WHERE r.title_id = t.id) AS rating
     FROM titles t
     LEFT JOIN categories c ON c.id = t.category_id";

#[derive(Clone)]
pub struct PostgresTitleRepository {
    pool: PgPool,
}

impl PostgresTitleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn genres_for(&self, title_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Genre>>> {
        let rows = sqlx::query_as::<_, TitleGenreRow>(
            "SELECT tg.title_id, g.id, g.slug, g.name
             FROM title_genres tg
             JOIN genres g ON g.id = tg.genre_id
             WHERE tg.title_id = ANY($1)
             ORDER BY g.name, g.id",
        )
        .bind(title_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_title: HashMap<i64, Vec<Genre>> = HashMap::new();
        for row in rows {
            let title_id = row.title_id;
            by_title
                .entry(title_id)
                .or_default()
                .push(Genre::try_from(row)?);
        }
        Ok(by_title)
    }

    async fn assemble(&self, rows: Vec<TitleRow>) -> DomainResult<Vec<Title>> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut genres = self.genres_for(&ids).await?;
        rows.into_iter()
            .map(|row| {
                let title_genres = genres.remove(&row.id).unwrap_or_default();
                row.into_title(title_genres)
            })
            .collect()
    }

    async fn load(&self, id: TitleId) -> DomainResult<Title> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("title not found".into()))
    }
}

#[derive(Debug, FromRow)]
struct TitleRow {
    id: i64,
    name: String,
    year: i32,
    description: Option<String>,
    category_id: Option<i64>,
    category_slug: Option<String>,
    category_name: Option<String>,
    rating: Option<f64>,
}

impl TitleRow {
    fn into_title(self, genres: Vec<Genre>) -> DomainResult<Title> {
        let category = match (self.category_id, self.category_slug, self.category_name) {
            (Some(id), Some(slug), Some(name)) => Some(Category {
                id: CategoryId::new(id)?,
                slug: Slug::new(slug)?,
                name: CatalogName::new(name)?,
            }),
            _ => None,
        };

        Ok(Title {
            id: TitleId::new(self.id)?,
            name: TitleName::new(self.name)?,
            year: ReleaseYear::from_stored(self.year),
            description: self.description,
            category,
            genres,
            rating: Rating::from_mean(self.rating),
        })
    }
}

#[derive(Debug, FromRow)]
struct TitleGenreRow {
    title_id: i64,
    id: i64,
    slug: String,
    name: String,
}

impl TryFrom<TitleGenreRow> for Genre {
    type Error = DomainError;

    fn try_from(row: TitleGenreRow) -> Result<Self, Self::Error> {
        Ok(Genre {
            id: GenreId::new(row.id)?,
            slug: Slug::new(row.slug)?,
            name: CatalogName::new(row.name)?,
        })
    }
}

async fn replace_genres(
    tx: &mut Transaction<'_, Postgres>,
    title_id: i64,
    genres: &[Genre],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM title_genres WHERE title_id = $1")
        .bind(title_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;

    if genres.is_empty() {
        return Ok(());
    }

    let mut qb: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO title_genres (title_id, genre_id) ");
    qb.push_values(genres, |mut row, genre| {
        row.push_bind(title_id).push_bind(i64::from(genre.id));
    });
    qb.build()
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl TitleWriteRepository for PostgresTitleRepository {
    async fn insert(&self, title: NewTitle) -> DomainResult<Title> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO titles (name, year, description, category_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(title.name.as_str())
        .bind(title.year.value())
        .bind(title.description.as_deref())
        .bind(i64::from(title.category.id))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_genres(&mut tx, id, &title.genres).await?;
        tx.commit().await.map_err(map_sqlx)?;

        self.load(TitleId::new(id)?).await
    }

    async fn update(&self, update: TitleUpdate) -> DomainResult<Title> {
        let id = i64::from(update.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let has_columns = update.name.is_some()
            || update.year.is_some()
            || update.description.is_some()
            || update.category.is_some();

        if has_columns {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE titles SET ");
            let mut set = qb.separated(", ");
            if let Some(name) = &update.name {
                set.push("name = ").push_bind_unseparated(name.as_str().to_owned());
            }
            if let Some(year) = update.year {
                set.push("year = ").push_bind_unseparated(year.value());
            }
            if let Some(description) = &update.description {
                set.push("description = ")
                    .push_bind_unseparated(description.clone());
            }
            if let Some(category) = &update.category {
                set.push("category_id = ")
                    .push_bind_unseparated(i64::from(category.id));
            }
            qb.push(" WHERE id = ").push_bind(id);

            let result = qb.build().execute(&mut *tx).await.map_err(map_sqlx)?;
            if result.rows_affected() == 0 {
                return Err(DomainError::NotFound("title not found".into()));
            }
        }

        if let Some(genres) = &update.genres {
            replace_genres(&mut tx, id, genres).await?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        self.load(update.id).await
    }

    async fn delete(&self, id: TitleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM titles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("title not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TitleReadRepository for PostgresTitleRepository {
    async fn find_by_id(&self, id: TitleId) -> DomainResult<Option<Title>> {
        let sql = format!("{TITLE_SELECT} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TitleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &TitleFilter) -> DomainResult<Vec<Title>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(TITLE_SELECT);
        qb.push(" WHERE TRUE");
        if let Some(slug) = &filter.category {
            qb.push(" AND c.slug = ").push_bind(slug.as_str().to_owned());
        }
        if let Some(slug) = &filter.genre {
            qb.push(
                " AND EXISTS (SELECT 1 FROM title_genres tg JOIN genres g ON g.id = tg.genre_id
                   WHERE tg.title_id = t.id AND g.slug = ",
            )
            .push_bind(slug.as_str().to_owned())
            .push(")");
        }
        if let Some(name) = &filter.name {
            qb.push(" AND t.name ILIKE ")
                .push_bind(format!("%{}%", escape_like(name)));
        }
        if let Some(year) = filter.year {
            qb.push(" AND t.year = ").push_bind(year);
        }
        qb.push(" ORDER BY t.id");

        let rows = qb
            .build_query_as::<TitleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.assemble(rows).await
    }
}
