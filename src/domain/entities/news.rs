//! News entity.

use chrono::{DateTime, Utc};

use crate::domain::pagination::SortField;

/// A news article.
///
/// Owns exactly one author by reference and its comments; linked to tags
/// many-to-many. `tag_ids` is kept sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub tag_ids: Vec<i64>,
    pub created_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

/// Full field set for creating or replacing a news.
///
/// Replacing a news also replaces its whole tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub tag_ids: Vec<i64>,
}

impl NewNews {
    /// Sorts and deduplicates the tag ids.
    pub fn normalized(mut self) -> Self {
        self.tag_ids.sort_unstable();
        self.tag_ids.dedup();
        self
    }
}

/// Partial update of a news. `tag_ids: Some(..)` replaces the tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    pub tag_ids: Option<Vec<i64>>,
}

impl NewsPatch {
    pub fn apply_to(self, current: &News) -> NewNews {
        NewNews {
            title: self.title.unwrap_or_else(|| current.title.clone()),
            content: self.content.unwrap_or_else(|| current.content.clone()),
            author_id: self.author_id.unwrap_or(current.author_id),
            tag_ids: self.tag_ids.unwrap_or_else(|| current.tag_ids.clone()),
        }
        .normalized()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsSort {
    Id,
    Title,
    Content,
    AuthorId,
    CreatedDate,
    LastUpdatedDate,
}

impl SortField for NewsSort {
    const ALLOWED: &'static [Self] = &[
        NewsSort::Id,
        NewsSort::Title,
        NewsSort::Content,
        NewsSort::AuthorId,
        NewsSort::CreatedDate,
        NewsSort::LastUpdatedDate,
    ];

    fn name(self) -> &'static str {
        match self {
            NewsSort::Id => "id",
            NewsSort::Title => "title",
            NewsSort::Content => "content",
            NewsSort::AuthorId => "authorId",
            NewsSort::CreatedDate => "createdDate",
            NewsSort::LastUpdatedDate => "lastUpdatedDate",
        }
    }

    fn column(self) -> &'static str {
        match self {
            NewsSort::Id => "id",
            NewsSort::Title => "title",
            NewsSort::Content => "content",
            NewsSort::AuthorId => "author_id",
            NewsSort::CreatedDate => "created_date",
            NewsSort::LastUpdatedDate => "last_updated_date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_news() -> News {
        let now = Utc::now();
        News {
            id: 7,
            title: "Rust 2024".to_string(),
            content: "Edition released".to_string(),
            author_id: 1,
            tag_ids: vec![1, 2],
            created_date: now,
            last_updated_date: now,
        }
    }

    #[test]
    fn test_patch_only_title() {
        let current = sample_news();
        let patch = NewsPatch {
            title: Some("Rust 2027".to_string()),
            ..Default::default()
        };

        let merged = patch.apply_to(&current);
        assert_eq!(merged.title, "Rust 2027");
        assert_eq!(merged.content, current.content);
        assert_eq!(merged.author_id, current.author_id);
        assert_eq!(merged.tag_ids, current.tag_ids);
    }

    #[test]
    fn test_patch_replaces_tags() {
        let patch = NewsPatch {
            tag_ids: Some(vec![9, 3, 9]),
            ..Default::default()
        };

        assert_eq!(patch.apply_to(&sample_news()).tag_ids, vec![3, 9]);
    }

    #[test]
    fn test_patch_can_clear_tags() {
        let patch = NewsPatch {
            tag_ids: Some(vec![]),
            ..Default::default()
        };

        assert!(patch.apply_to(&sample_news()).tag_ids.is_empty());
    }

    #[test]
    fn test_sort_maps_to_snake_case_columns() {
        let sort = NewsSort::parse("lastUpdatedDate").unwrap();
        assert_eq!(sort.column(), "last_updated_date");
    }
}
