//! PostgreSQL implementation of author repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Author, AuthorSort, NewAuthor};
use crate::domain::pagination::{PageRequest, SortField};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author::new(row.id, row.name)
    }
}

/// PostgreSQL repository for authors.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(new_author.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>("SELECT id, name FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Author::from))
    }

    async fn find_page(&self, request: PageRequest<AuthorSort>) -> Result<Vec<Author>, AppError> {
        // Column comes from the AuthorSort allow-list, never from the client.
        let sql = format!(
            "SELECT id, name FROM authors ORDER BY {} ASC, id ASC LIMIT $1 OFFSET $2",
            request.sort().column()
        );

        let rows = sqlx::query_as::<_, AuthorRow>(&sql)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_news_id(&self, news_id: i64) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT a.id, a.name
            FROM authors a
            JOIN news n ON n.author_id = a.id
            WHERE n.id = $1
            "#,
        )
        .bind(news_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn update(&self, id: i64, author: NewAuthor) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            UPDATE authors SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(author.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_news(&self, author_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
