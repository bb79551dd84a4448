//! Hypermedia links for resources, relations and pages.
//!
//! Response DTOs are never mutated to carry links. Instead they are paired
//! with the links computed for them:
//!
//! - [`Linked`] - one DTO, fields flattened, plus a `links` array
//! - [`LinkedCollection`] - a list of [`Linked`] items, optional page metadata
//!   and collection-level links
//!
//! [`LinkBuilder`] produces every href. Two URI families exist:
//!
//! - `/{resource}/{id}` addresses one resource
//! - `/{resource}/news/{newsId}` addresses the resource scoped to a news
//!
//! Page links spell out `page`, `size` and `sortedBy` explicitly so clients can
//! walk a collection by rewriting the query string.

use serde::Serialize;
use url::form_urlencoded;

use crate::domain::pagination::Page;

/// Top-level resource collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Authors,
    News,
    Tags,
    Comments,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Authors => "authors",
            Resource::News => "news",
            Resource::Tags => "tags",
            Resource::Comments => "comments",
        }
    }
}

/// A single `{rel, href}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn self_link(href: impl Into<String>) -> Self {
        Self::new("self", href)
    }
}

/// A DTO together with its links.
#[derive(Debug, Serialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub item: T,
    pub links: Vec<Link>,
}

impl<T> Linked<T> {
    pub fn new(item: T, links: Vec<Link>) -> Self {
        Self { item, links }
    }
}

/// Page metadata attached to paginated collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub number: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

/// A collection of linked DTOs with collection-level links.
#[derive(Debug, Serialize)]
pub struct LinkedCollection<T> {
    pub content: Vec<Linked<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageMeta>,
    pub links: Vec<Link>,
}

impl<T> LinkedCollection<T> {
    /// Wraps an unpaginated list (relation lookups).
    pub fn new(items: Vec<T>, item_links: impl Fn(&T) -> Vec<Link>, links: Vec<Link>) -> Self {
        let content = items
            .into_iter()
            .map(|item| {
                let item_links = item_links(&item);
                Linked::new(item, item_links)
            })
            .collect();

        Self {
            content,
            page: None,
            links,
        }
    }

    /// Wraps one page of a collection and records its metadata.
    pub fn paged(page: Page<T>, item_links: impl Fn(&T) -> Vec<Link>, links: Vec<Link>) -> Self {
        let meta = PageMeta {
            number: page.page,
            size: page.size,
            total_elements: page.total_items,
            total_pages: page.total_pages(),
        };

        let mut collection = Self::new(page.items, item_links, links);
        collection.page = Some(meta);
        collection
    }
}

/// Builds canonical hrefs, optionally prefixed with a public base URL.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    /// Creates a builder. An empty `base_url` yields absolute paths (`/news/7`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// `/{resource}`
    pub fn collection(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// `/{resource}/{id}`
    pub fn item(&self, resource: Resource, id: i64) -> String {
        format!("{}/{}", self.collection(resource), id)
    }

    /// `/{resource}/news/{newsId}`
    pub fn by_news(&self, resource: Resource, news_id: i64) -> String {
        format!("{}/news/{}", self.collection(resource), news_id)
    }

    /// `/{resource}?page=P&size=S&sortedBy=F`
    pub fn page(&self, resource: Resource, page: i64, size: i64, sorted_by: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &page.to_string())
            .append_pair("size", &size.to_string())
            .append_pair("sortedBy", sorted_by)
            .finish();

        format!("{}?{}", self.collection(resource), query)
    }

    pub fn self_links(&self, resource: Resource, id: i64) -> Vec<Link> {
        vec![Link::self_link(self.item(resource, id))]
    }

    /// Links carried by every news representation.
    pub fn news_links(&self, news_id: i64) -> Vec<Link> {
        vec![
            Link::self_link(self.item(Resource::News, news_id)),
            Link::new("author", self.by_news(Resource::Authors, news_id)),
            Link::new("tags", self.by_news(Resource::Tags, news_id)),
            Link::new("comments", self.by_news(Resource::Comments, news_id)),
        ]
    }

    /// Collection links for one page: `self`, `page` (the request as made),
    /// `first`, and `prev`/`next`/`last` where they exist.
    pub fn page_links<T>(&self, resource: Resource, page: &Page<T>, sorted_by: &str) -> Vec<Link> {
        let at = |number: i64| self.page(resource, number, page.size, sorted_by);

        let mut links = vec![
            Link::self_link(self.collection(resource)),
            Link::new("page", at(page.page)),
            Link::new("first", at(0)),
        ];

        if page.has_previous() {
            links.push(Link::new("prev", at(page.page - 1)));
        }
        if page.has_next() {
            links.push(Link::new("next", at(page.page + 1)));
        }

        let total_pages = page.total_pages();
        if total_pages > 0 {
            links.push(Link::new("last", at(total_pages - 1)));
        }

        links
    }
}
