// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentId, CommentRepository, CommentText, CommentUpdate, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::review::ReviewId;
use crate::domain::user::{Author, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_SELECT: &str = "SELECT c.id, c.review_id, c.author_id, u.username, c.text, c.pub_date
     FROM comments c
     JOIN users u ON u.id = c.author_id";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load(&self, id: i64) -> DomainResult<Comment> {
        let sql = format!("{COMMENT_SELECT} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        Comment::try_from(row)
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    review_id: i64,
    author_id: i64,
    username: String,
    text: String,
    pub_date: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            review_id: ReviewId::new(row.review_id)?,
            author: Author {
                id: UserId::new(row.author_id)?,
                username: Username::new(row.username)?,
            },
            text: CommentText::new(row.text)?,
            pub_date: row.pub_date,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO comments (review_id, author_id, text, pub_date)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(i64::from(comment.review_id))
        .bind(i64::from(comment.author_id))
        .bind(comment.text.as_str())
        .bind(comment.pub_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.load(id).await
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let id = i64::from(update.id);
        let result = sqlx::query("UPDATE comments SET text = $2 WHERE id = $1")
            .bind(id)
            .bind(update.text.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        self.load(id).await
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        review_id: ReviewId,
        id: CommentId,
    ) -> DomainResult<Option<Comment>> {
        let sql = format!("{COMMENT_SELECT} WHERE c.review_id = $1 AND c.id = $2");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(review_id))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_review(&self, review_id: ReviewId) -> DomainResult<Vec<Comment>> {
        let sql = format!("{COMMENT_SELECT} WHERE c.review_id = $1 ORDER BY c.pub_date, c.id");
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(review_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
