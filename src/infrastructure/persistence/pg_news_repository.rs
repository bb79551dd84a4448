//! PostgreSQL implementation of news repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewNews, News, NewsSort};
use crate::domain::pagination::{PageRequest, SortField};
use crate::domain::repositories::NewsRepository;
use crate::error::AppError;

/// Projection shared by every news query. Tag ids are aggregated per row and
/// come back sorted; an untagged news yields an empty array.
const NEWS_COLUMNS: &str = r#"
    n.id,
    n.title,
    n.content,
    n.author_id,
    n.created_date,
    n.last_updated_date,
    ARRAY(SELECT nt.tag_id FROM news_tags nt WHERE nt.news_id = n.id ORDER BY nt.tag_id) AS tag_ids
"#;

#[derive(FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_date: DateTime<Utc>,
    last_updated_date: DateTime<Utc>,
    tag_ids: Vec<i64>,
}

impl From<NewsRow> for News {
    fn from(row: NewsRow) -> Self {
        News {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
            tag_ids: row.tag_ids,
            created_date: row.created_date,
            last_updated_date: row.last_updated_date,
        }
    }
}

/// PostgreSQL repository for news.
///
/// Writes to `news` and `news_tags` share one transaction. Deleting a news
/// removes its comments and tag links through `ON DELETE CASCADE`.
pub struct PgNewsRepository {
    pool: Arc<PgPool>,
}

impl PgNewsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

async fn attach_tags(
    conn: &mut PgConnection,
    news_id: i64,
    tag_ids: &[i64],
) -> Result<(), sqlx::Error> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO news_tags (news_id, tag_id)
        SELECT $1, UNNEST($2::BIGINT[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(news_id)
    .bind(tag_ids)
    .execute(conn)
    .await?;

    Ok(())
}

async fn fetch_news(conn: &mut PgConnection, id: i64) -> Result<Option<NewsRow>, sqlx::Error> {
    let sql = format!("SELECT {NEWS_COLUMNS} FROM news n WHERE n.id = $1");

    sqlx::query_as::<_, NewsRow>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    async fn create(&self, new_news: NewNews) -> Result<News, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO news (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&new_news.title)
        .bind(&new_news.content)
        .bind(new_news.author_id)
        .fetch_one(&mut *tx)
        .await?;

        attach_tags(&mut tx, id, &new_news.tag_ids).await?;

        let row = fetch_news(&mut tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<News>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let row = fetch_news(&mut conn, id).await?;

        Ok(row.map(News::from))
    }

    async fn find_page(&self, request: PageRequest<NewsSort>) -> Result<Vec<News>, AppError> {
        // Column comes from the NewsSort allow-list, never from the client.
        let sql = format!(
            "SELECT {NEWS_COLUMNS} FROM news n ORDER BY n.{} ASC, n.id ASC LIMIT $1 OFFSET $2",
            request.sort().column()
        );

        let rows = sqlx::query_as::<_, NewsRow>(&sql)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(News::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, news: NewNews) -> Result<Option<News>, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE news SET
                title             = $2,
                content           = $3,
                author_id         = $4,
                last_updated_date = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&news.title)
        .bind(&news.content)
        .bind(news.author_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query("DELETE FROM news_tags WHERE news_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        attach_tags(&mut tx, id, &news.tag_ids).await?;

        let row = fetch_news(&mut tx, id).await?;

        tx.commit().await?;

        Ok(row.map(News::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM news WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }
}
