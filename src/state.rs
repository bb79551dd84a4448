//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::api::links::LinkBuilder;
use crate::application::services::{AuthorService, CommentService, NewsService, TagService};
use crate::domain::repositories::{
    AuthorRepository, CommentRepository, HealthRepository, NewsRepository, TagRepository,
};
use crate::infrastructure::persistence::{
    PgAuthorRepository, PgCommentRepository, PgHealthRepository, PgNewsRepository,
    PgTagRepository,
};

/// Repository implementations the services are built from.
pub struct Repositories {
    pub authors: Arc<dyn AuthorRepository>,
    pub news: Arc<dyn NewsRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub health: Arc<dyn HealthRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            authors: Arc::new(PgAuthorRepository::new(pool.clone())),
            news: Arc::new(PgNewsRepository::new(pool.clone())),
            tags: Arc::new(PgTagRepository::new(pool.clone())),
            comments: Arc::new(PgCommentRepository::new(pool.clone())),
            health: Arc::new(PgHealthRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService>,
    pub news_service: Arc<NewsService>,
    pub tag_service: Arc<TagService>,
    pub comment_service: Arc<CommentService>,
    pub health: Arc<dyn HealthRepository>,
    pub links: Arc<LinkBuilder>,
}

impl AppState {
    pub fn new(repositories: Repositories, links: LinkBuilder) -> Self {
        let Repositories {
            authors,
            news,
            tags,
            comments,
            health,
        } = repositories;

        Self {
            author_service: Arc::new(AuthorService::new(authors.clone())),
            news_service: Arc::new(NewsService::new(news.clone(), authors, tags.clone())),
            tag_service: Arc::new(TagService::new(tags)),
            comment_service: Arc::new(CommentService::new(comments, news)),
            health,
            links: Arc::new(links),
        }
    }
}
