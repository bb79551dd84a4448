//! Author entity.

use crate::domain::pagination::SortField;

/// A writer of news.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

impl Author {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Full field set for creating or replacing an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
}

/// Partial update of an author. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<String>,
}

impl AuthorPatch {
    /// Merges the patch over the current state.
    pub fn apply_to(self, current: &Author) -> NewAuthor {
        NewAuthor {
            name: self.name.unwrap_or_else(|| current.name.clone()),
        }
    }
}

/// Fields authors can be listed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorSort {
    Id,
    Name,
}

impl SortField for AuthorSort {
    const ALLOWED: &'static [Self] = &[AuthorSort::Id, AuthorSort::Name];

    fn name(self) -> &'static str {
        match self {
            AuthorSort::Id => "id",
            AuthorSort::Name => "name",
        }
    }

    fn column(self) -> &'static str {
        match self {
            AuthorSort::Id => "id",
            AuthorSort::Name => "name",
        }
    }
}
