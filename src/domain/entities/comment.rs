//! Comment entity.

use crate::domain::pagination::SortField;

/// A reader comment. `news_id` is a back-reference; the news owns its comments
/// and deleting it removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub news_id: i64,
}

impl Comment {
    pub fn new(id: i64, content: String, news_id: i64) -> Self {
        Self {
            id,
            content,
            news_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub news_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub content: Option<String>,
    pub news_id: Option<i64>,
}

impl CommentPatch {
    pub fn apply_to(self, current: &Comment) -> NewComment {
        NewComment {
            content: self.content.unwrap_or_else(|| current.content.clone()),
            news_id: self.news_id.unwrap_or(current.news_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSort {
    Id,
    Content,
    NewsId,
}

impl SortField for CommentSort {
    const ALLOWED: &'static [Self] = &[CommentSort::Id, CommentSort::Content, CommentSort::NewsId];

    fn name(self) -> &'static str {
        match self {
            CommentSort::Id => "id",
            CommentSort::Content => "content",
            CommentSort::NewsId => "newsId",
        }
    }

    fn column(self) -> &'static str {
        match self {
            CommentSort::Id => "id",
            CommentSort::Content => "content",
            CommentSort::NewsId => "news_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_moves_comment_to_other_news() {
        let current = Comment::new(3, "First!".to_string(), 1);
        let patch = CommentPatch {
            news_id: Some(2),
            ..Default::default()
        };

        let merged = patch.apply_to(&current);
        assert_eq!(merged.news_id, 2);
        assert_eq!(merged.content, "First!");
    }

    #[test]
    fn test_sort_names_are_camel_case() {
        assert_eq!(CommentSort::parse("newsId").unwrap(), CommentSort::NewsId);
        assert!(CommentSort::parse("news_id").is_err());
    }
}
