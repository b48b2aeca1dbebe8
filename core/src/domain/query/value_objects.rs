use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::PaginationConfig;

/// Keys that carry the free-text search term, checked in order.
pub const SEARCH_PARAMS: [&str; 2] = ["search", "q"];
pub const ORDERING_PARAM: &str = "ordering";
pub const PAGE_PARAM: &str = "page";
pub const PAGE_SIZE_PARAM: &str = "page_size";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse a single ordering token, `-` marks a descending key.
    pub fn parse(part: &str) -> Option<Self> {
        let part = part.trim();
        match part.strip_prefix('-') {
            Some(stripped) if !stripped.trim().is_empty() => Some(Self::desc(stripped.trim())),
            Some(_) => None,
            None if part.is_empty() => None,
            None => Some(Self::asc(part)),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Asc => write!(f, "{}", self.field),
            SortDirection::Desc => write!(f, "-{}", self.field),
        }
    }
}

/// Parsed sort parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn new() -> Self {
        Self { sorts: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        Self {
            sorts: s.split(',').filter_map(SortSpec::parse).collect(),
        }
    }
}

/// Page number and page size as sent by the caller, before defaults and clamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PaginationParams {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self { page, page_size }
    }

    /// Unparseable numbers count as absent.
    pub fn parse(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: page.and_then(|value| value.trim().parse::<i64>().ok()),
            page_size: page_size.and_then(|value| value.trim().parse::<i64>().ok()),
        }
    }

    pub fn resolve(&self, config: &PaginationConfig) -> PageRequest {
        PageRequest::resolve(self.page, self.page_size, config)
    }
}

/// A validated page window: `page >= 1` and `page_size >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Page defaults to 1 when absent or below 1. Page size defaults to the
    /// configured default when absent and is clamped into `1..=max_page_size`.
    pub fn resolve(page: Option<i64>, page_size: Option<i64>, config: &PaginationConfig) -> Self {
        let max_page_size = config.max_page_size.max(1);

        let page = page
            .filter(|page| *page >= 1)
            .and_then(|page| usize::try_from(page).ok())
            .unwrap_or(1);

        let page_size = match page_size {
            Some(size) if size < 1 => 1,
            Some(size) => usize::try_from(size)
                .unwrap_or(max_page_size)
                .min(max_page_size),
            None => config.default_page_size.clamp(1, max_page_size),
        };

        Self { page, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first record of this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Combined query parameters (raw values, ordering, pagination)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub values: BTreeMap<String, String>,
    pub ordering: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from query string map
    /// Handles formats like:
    /// - field=value (interpreted by the record type's filter spec)
    /// - search=term or q=term
    /// - ordering=field or ordering=-field,other
    /// - page=2, page_size=20
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        Self::from_pairs(query_map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let ordering = values
            .get(ORDERING_PARAM)
            .map(|value| SortParams::from_string(value))
            .unwrap_or_default();

        let pagination = PaginationParams::parse(
            values.get(PAGE_PARAM).map(String::as_str),
            values.get(PAGE_SIZE_PARAM).map(String::as_str),
        );

        Self {
            values,
            ordering,
            pagination,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The first non-blank value among `search` and `q`, trimmed.
    pub fn search_term(&self) -> Option<&str> {
        SEARCH_PARAMS
            .iter()
            .filter_map(|key| self.get(key))
            .map(str::trim)
            .find(|term| !term.is_empty())
    }

    /// Returns a copy with `key` set, re-deriving ordering and pagination.
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(key.into(), value.into());
        Self::from_pairs(values)
    }

    /// Returns a copy without `key`, re-deriving ordering and pagination.
    pub fn without(&self, key: &str) -> Self {
        let mut values = self.values.clone();
        values.remove(key);
        Self::from_pairs(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PaginationConfig {
        PaginationConfig {
            default_page_size: 10,
            max_page_size: 100,
        }
    }

    #[test]
    fn test_filter_values_are_kept_raw() {
        let mut map = HashMap::new();
        map.insert("year_from".to_string(), "2021".to_string());
        map.insert("title_contains".to_string(), "potter".to_string());
        let params = QueryParams::from_query_map(&map);
        assert_eq!(params.get("year_from"), Some("2021"));
        assert_eq!(params.get("title_contains"), Some("potter"));
        assert_eq!(params.get("unknown"), None);
    }

    #[test]
    fn test_sort_parse() {
        let mut map = HashMap::new();
        map.insert(
            "ordering".to_string(),
            "-publication_year,title".to_string(),
        );
        let params = QueryParams::from_query_map(&map);
        assert_eq!(params.ordering.sorts.len(), 2);
        assert_eq!(params.ordering.sorts[0].field, "publication_year");
        assert_eq!(params.ordering.sorts[0].direction, SortDirection::Desc);
        assert_eq!(params.ordering.sorts[1].field, "title");
        assert_eq!(params.ordering.sorts[1].direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_parse_skips_blank_tokens() {
        let sort = SortParams::from_string(" title , ,-, -author_name ");
        assert_eq!(
            sort.sorts,
            vec![SortSpec::asc("title"), SortSpec::desc("author_name")]
        );
    }

    #[test]
    fn test_sort_spec_display_round_trips_direction() {
        assert_eq!(SortSpec::desc("created_at").to_string(), "-created_at");
        assert_eq!(SortSpec::asc("title").to_string(), "title");
    }

    #[test]
    fn test_pagination_parse() {
        let params = QueryParams::from_pairs([("page", "3"), ("page_size", "50")]);
        assert_eq!(params.pagination, PaginationParams::new(Some(3), Some(50)));

        let request = params.pagination.resolve(&config());
        assert_eq!(request.page(), 3);
        assert_eq!(request.page_size(), 50);
        assert_eq!(request.offset(), 100);
    }

    #[test]
    fn test_pagination_defaults_when_absent_or_invalid() {
        let params = QueryParams::from_pairs([("page", "first"), ("page_size", "lots")]);
        assert_eq!(params.pagination, PaginationParams::default());

        let request = params.pagination.resolve(&config());
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn test_pagination_clamps_out_of_range_values() {
        let request = PageRequest::resolve(Some(0), Some(500), &config());
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 100);

        let request = PageRequest::resolve(Some(-4), Some(0), &config());
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 1);
    }

    #[test]
    fn test_search_term_prefers_search_over_q() {
        let params = QueryParams::from_pairs([("search", "dune"), ("q", "potter")]);
        assert_eq!(params.search_term(), Some("dune"));

        let params = QueryParams::from_pairs([("search", "   "), ("q", " potter ")]);
        assert_eq!(params.search_term(), Some("potter"));

        assert_eq!(QueryParams::new().search_term(), None);
    }

    #[test]
    fn test_with_and_without_rederive_pagination() {
        let params = QueryParams::from_pairs([("page", "2"), ("title", "Dune")]);

        let next = params.with("page", "3");
        assert_eq!(next.pagination.page, Some(3));
        assert_eq!(next.get("title"), Some("Dune"));

        let first = params.without("page");
        assert_eq!(first.pagination.page, None);
    }
}
