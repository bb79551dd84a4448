//! PostgreSQL implementation of tag repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTag, Tag, TagSort};
use crate::domain::pagination::{PageRequest, SortField};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag::new(row.id, row.name)
    }
}

/// PostgreSQL repository for tags.
///
/// Tag names are unique (`tags_name_key`); violations surface as
/// [`AppError::Conflict`].
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            INSERT INTO tags (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(new_tag.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Tag::from))
    }

    async fn find_page(&self, request: PageRequest<TagSort>) -> Result<Vec<Tag>, AppError> {
        let sql = format!(
            "SELECT id, name FROM tags ORDER BY {} ASC, id ASC LIMIT $1 OFFSET $2",
            request.sort().column()
        );

        let rows = sqlx::query_as::<_, TagRow>(&sql)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tags")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN news_tags nt ON nt.tag_id = t.id
            WHERE nt.news_id = $1
            ORDER BY t.id
            "#,
        )
        .bind(news_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn find_missing_ids(&self, mut ids: Vec<i64>) -> Result<Vec<i64>, AppError> {
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(ids);
        }

        let missing = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT requested.id
            FROM UNNEST($1::BIGINT[]) AS requested(id)
            WHERE NOT EXISTS (SELECT 1 FROM tags t WHERE t.id = requested.id)
            ORDER BY requested.id
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(missing)
    }

    async fn update(&self, id: i64, tag: NewTag) -> Result<Option<Tag>, AppError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            UPDATE tags SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(tag.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Tag::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        // news_tags rows go with it (ON DELETE CASCADE).
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
