// src/infrastructure/repositories/postgres_review.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::review::{
    NewReview, Review, ReviewId, ReviewRepository, ReviewText, ReviewUpdate, Score,
};
use crate::domain::title::TitleId;
use crate::domain::user::{Author, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const REVIEW_SELECT: &str = "SELECT r.id, r.title_id, r.author_id, u.username,
            r.text, r.score, r.pub_date
     FROM reviews r
     JOIN users u ON u.id = r.author_id";

#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load(&self, id: i64) -> DomainResult<Review> {
        let sql = format!("{REVIEW_SELECT} WHERE r.id = $1");
        let row = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("review not found".into()))?;
        Review::try_from(row)
    }
}

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: i64,
    title_id: i64,
    author_id: i64,
    username: String,
    text: String,
    score: i16,
    pub_date: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId::new(row.id)?,
            title_id: TitleId::new(row.title_id)?,
            author: Author {
                id: UserId::new(row.author_id)?,
                username: Username::new(row.username)?,
            },
            text: ReviewText::new(row.text)?,
            score: Score::new(i64::from(row.score))?,
            pub_date: row.pub_date,
        })
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn exists_for(&self, author: UserId, title_id: TitleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE author_id = $1 AND title_id = $2)",
        )
        .bind(i64::from(author))
        .bind(i64::from(title_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO reviews (title_id, author_id, text, score, pub_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(i64::from(review.title_id))
        .bind(i64::from(review.author_id))
        .bind(review.text.as_str())
        .bind(i16::from(review.score.value()))
        .bind(review.pub_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.load(id).await
    }

    async fn update(&self, update: ReviewUpdate) -> DomainResult<Review> {
        let id = i64::from(update.id);
        let result = sqlx::query(
            "UPDATE reviews
             SET text = COALESCE($2, text), score = COALESCE($3, score)
             WHERE id = $1",
        )
        .bind(id)
        .bind(update.text.as_ref().map(ReviewText::as_str))
        .bind(update.score.map(|s| i16::from(s.value())))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("review not found".into()));
        }
        self.load(id).await
    }

    async fn delete(&self, id: ReviewId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("review not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, title_id: TitleId, id: ReviewId) -> DomainResult<Option<Review>> {
        let sql = format!("{REVIEW_SELECT} WHERE r.title_id = $1 AND r.id = $2");
        let row = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(i64::from(title_id))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Review::try_from).transpose()
    }

    async fn list_by_title(&self, title_id: TitleId) -> DomainResult<Vec<Review>> {
        let sql = format!("{REVIEW_SELECT} WHERE r.title_id = $1 ORDER BY r.pub_date, r.id");
        let rows = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(i64::from(title_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Review::try_from).collect()
    }
}
