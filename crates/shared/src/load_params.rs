//! List-query parameters shared by every resource surface.
//!
//! Each list endpoint accepts the same query-string shape
//! (`filter`, `sortColumn`, `descending`, `startIndex`, `rows`), which is
//! normalized into a [`LoadParams`] value before it reaches a repository.

use serde::Deserialize;

/// Raw query-string shape of a list request.
///
/// All fields are optional; defaults are applied in [`LoadParamsQuery::resolve`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadParamsQuery {
    /// Substring filter on the resource's display field.
    pub filter: Option<String>,
    /// Case-insensitive name of the view-model column to sort by.
    pub sort_column: Option<String>,
    /// Sort direction; `false` means ascending.
    pub descending: Option<bool>,
    /// Number of rows to skip.
    pub start_index: Option<i64>,
    /// Number of rows to return.
    pub rows: Option<i64>,
}

/// Normalized filter/sort/pagination descriptor.
///
/// Out-of-range paging values are passed through unchanged; the storage
/// layer receives them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadParams {
    pub filter: Option<String>,
    pub sort_column: Option<String>,
    pub descending: bool,
    pub start_index: i64,
    pub rows: i64,
}

impl LoadParamsQuery {
    /// Normalize raw query parameters into a [`LoadParams`] value.
    ///
    /// An empty or whitespace-only filter is treated as absent. `rows`
    /// falls back to `default_rows` from configuration.
    pub fn resolve(self, default_rows: i64) -> LoadParams {
        let filter = self
            .filter
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());

        LoadParams {
            filter,
            sort_column: self.sort_column,
            descending: self.descending.unwrap_or(false),
            start_index: self.start_index.unwrap_or(0),
            rows: self.rows.unwrap_or(default_rows),
        }
    }
}

impl LoadParams {
    /// Parameters for an unfiltered, unsorted fetch of everything.
    ///
    /// Used by the spreadsheet export, which transcribes the full record set.
    pub fn all() -> Self {
        Self {
            filter: None,
            sort_column: None,
            descending: false,
            start_index: 0,
            rows: i64::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let params = LoadParamsQuery::default().resolve(10);
        assert_eq!(params.filter, None);
        assert_eq!(params.sort_column, None);
        assert!(!params.descending);
        assert_eq!(params.start_index, 0);
        assert_eq!(params.rows, 10);
    }

    #[test]
    fn test_resolve_explicit_values() {
        let query = LoadParamsQuery {
            filter: Some("abc".to_string()),
            sort_column: Some("Naziv".to_string()),
            descending: Some(true),
            start_index: Some(20),
            rows: Some(5),
        };
        let params = query.resolve(10);
        assert_eq!(params.filter.as_deref(), Some("abc"));
        assert_eq!(params.sort_column.as_deref(), Some("Naziv"));
        assert!(params.descending);
        assert_eq!(params.start_index, 20);
        assert_eq!(params.rows, 5);
    }

    #[test]
    fn test_resolve_blank_filter_is_none() {
        let query = LoadParamsQuery {
            filter: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.resolve(10).filter, None);
    }

    #[test]
    fn test_resolve_filter_is_trimmed() {
        let query = LoadParamsQuery {
            filter: Some("  net ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.resolve(10).filter.as_deref(), Some("net"));
    }

    #[test]
    fn test_resolve_passes_through_out_of_range_paging() {
        // Negative or absurd values are not clamped here.
        let query = LoadParamsQuery {
            start_index: Some(-5),
            rows: Some(-1),
            ..Default::default()
        };
        let params = query.resolve(10);
        assert_eq!(params.start_index, -5);
        assert_eq!(params.rows, -1);
    }

    #[test]
    fn test_query_deserializes_camel_case() {
        let query: LoadParamsQuery = serde_json::from_str(
            r#"{"filter":"a","sortColumn":"naslov","descending":true,"startIndex":3,"rows":7}"#,
        )
        .unwrap();
        assert_eq!(query.filter.as_deref(), Some("a"));
        assert_eq!(query.sort_column.as_deref(), Some("naslov"));
        assert_eq!(query.descending, Some(true));
        assert_eq!(query.start_index, Some(3));
        assert_eq!(query.rows, Some(7));
    }

    #[test]
    fn test_all_spans_everything() {
        let params = LoadParams::all();
        assert_eq!(params.start_index, 0);
        assert_eq!(params.rows, i64::MAX);
        assert_eq!(params.filter, None);
    }
}
