//! Pagination and sorting query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::pagination::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, PageRequest, SortField,
};
use crate::error::AppError;

/// Query parameters accepted by every listing endpoint.
///
/// Uses `serde_with` to parse numbers from query strings as integers.
///
/// # Defaults
///
/// - `page`: 0
/// - `size`: 10
/// - `sortedBy`: `id`
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub size: Option<i64>,

    #[serde(default)]
    pub sorted_by: Option<String>,
}

impl ListParams {
    /// Validates the parameters against the allow-list `S`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page < 0`, `size < 1`, or
    /// `sortedBy` names a field outside `S::ALLOWED`.
    pub fn to_page_request<S: SortField>(&self) -> Result<PageRequest<S>, AppError> {
        let sort = S::parse(self.sorted_by.as_deref().unwrap_or(DEFAULT_SORT_FIELD))?;

        PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewsSort;

    fn params(page: Option<i64>, size: Option<i64>, sorted_by: Option<&str>) -> ListParams {
        ListParams {
            page,
            size,
            sorted_by: sorted_by.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let request = ListParams::default().to_page_request::<NewsSort>().unwrap();

        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), 10);
        assert_eq!(request.sort(), NewsSort::Id);
    }

    #[test]
    fn test_explicit_values() {
        let request = params(Some(2), Some(5), Some("createdDate"))
            .to_page_request::<NewsSort>()
            .unwrap();

        assert_eq!(request.offset(), 10);
        assert_eq!(request.sort(), NewsSort::CreatedDate);
    }

    #[test]
    fn test_snake_case_sort_field_is_rejected() {
        assert!(
            params(None, None, Some("created_date"))
                .to_page_request::<NewsSort>()
                .is_err()
        );
    }

    #[test]
    fn test_invalid_page_and_size() {
        assert!(params(Some(-1), None, None).to_page_request::<NewsSort>().is_err());
        assert!(params(None, Some(0), None).to_page_request::<NewsSort>().is_err());
    }

    #[test]
    fn test_query_string_numbers_parse() {
        let p: ListParams =
            serde_json::from_str(r#"{"page": "3", "size": "25", "sortedBy": "title"}"#).unwrap();

        assert_eq!(p.page, Some(3));
        assert_eq!(p.size, Some(25));
        assert_eq!(p.sorted_by.as_deref(), Some("title"));
    }

    #[test]
    fn test_non_numeric_page_is_error() {
        assert!(serde_json::from_str::<ListParams>(r#"{"page": "first"}"#).is_err());
    }
}
