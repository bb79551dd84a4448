//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Comment, CommentSort, NewComment};
use crate::domain::pagination::{PageRequest, SortField};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    news_id: i64,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment::new(row.id, row.content, row.news_id)
    }
}

/// PostgreSQL repository for comments.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (content, news_id)
            VALUES ($1, $2)
            RETURNING id, content, news_id
            "#,
        )
        .bind(new_comment.content)
        .bind(new_comment.news_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, content, news_id FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn find_page(
        &self,
        request: PageRequest<CommentSort>,
    ) -> Result<Vec<Comment>, AppError> {
        let sql = format!(
            "SELECT id, content, news_id FROM comments ORDER BY {} ASC, id ASC LIMIT $1 OFFSET $2",
            request.sort().column()
        );

        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, content, news_id
            FROM comments
            WHERE news_id = $1
            ORDER BY id
            "#,
        )
        .bind(news_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn update(&self, id: i64, comment: NewComment) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments SET content = $2, news_id = $3
            WHERE id = $1
            RETURNING id, content, news_id
            "#,
        )
        .bind(id)
        .bind(comment.content)
        .bind(comment.news_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
