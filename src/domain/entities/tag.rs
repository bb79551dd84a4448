//! Tag entity.

use crate::domain::pagination::SortField;

/// A label attached to any number of news. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPatch {
    pub name: Option<String>,
}

impl TagPatch {
    pub fn apply_to(self, current: &Tag) -> NewTag {
        NewTag {
            name: self.name.unwrap_or_else(|| current.name.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSort {
    Id,
    Name,
}

impl SortField for TagSort {
    const ALLOWED: &'static [Self] = &[TagSort::Id, TagSort::Name];

    fn name(self) -> &'static str {
        match self {
            TagSort::Id => "id",
            TagSort::Name => "name",
        }
    }

    fn column(self) -> &'static str {
        match self {
            TagSort::Id => "id",
            TagSort::Name => "name",
        }
    }
}
