//! Page requests, pages and sortable-field allow-lists.
//!
//! Listing endpoints accept `page` (zero-based), `size` and `sortedBy`. The sort
//! field is resolved against a per-entity [`SortField`] enum, so only a fixed set
//! of column names can ever reach SQL.

use serde_json::json;

use crate::error::AppError;

/// Zero-based index of the first page.
pub const DEFAULT_PAGE: i64 = 0;
/// Page size used when the client does not send `size`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Sort field used when the client does not send `sortedBy`.
pub const DEFAULT_SORT_FIELD: &str = "id";

/// Allow-list of fields a collection can be ordered by.
///
/// `name` is the public (JSON) field name clients send in `sortedBy`;
/// `column` is the database column it is mapped to.
pub trait SortField: Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Every accepted field, in the order reported to clients.
    const ALLOWED: &'static [Self];

    fn name(self) -> &'static str;

    fn column(self) -> &'static str;

    /// Resolves a client-supplied field name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing the allowed names when `name`
    /// is not one of them.
    fn parse(name: &str) -> Result<Self, AppError> {
        Self::ALLOWED
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| {
                AppError::bad_request(
                    "Unsupported sort field",
                    json!({
                        "sortedBy": name,
                        "allowed": Self::ALLOWED.iter().map(|f| f.name()).collect::<Vec<_>>(),
                    }),
                )
            })
    }
}

/// A validated request for one page of a sorted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<S> {
    page: i64,
    size: i64,
    sort: S,
}

impl<S: SortField> PageRequest<S> {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page < 0` or `size < 1`.
    pub fn new(page: i64, size: i64, sort: S) -> Result<Self, AppError> {
        if page < 0 {
            return Err(AppError::bad_request(
                "Page must be greater than or equal to 0",
                json!({ "page": page }),
            ));
        }

        if size < 1 {
            return Err(AppError::bad_request(
                "Size must be greater than or equal to 1",
                json!({ "size": size }),
            ));
        }

        Ok(Self { page, size, sort })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn sort(&self) -> S {
        self.sort
    }

    /// Number of rows to skip, saturating for absurdly large pages.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// One page of a collection together with the total number of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_items: i64,
}

impl<T> Page<T> {
    pub fn new<S: SortField>(items: Vec<T>, request: &PageRequest<S>, total_items: i64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total_items,
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.total_items <= 0 {
            return 0;
        }
        let full = self.total_items / self.size;
        if self.total_items % self.size == 0 {
            full
        } else {
            full + 1
        }
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
        }
    }
}
