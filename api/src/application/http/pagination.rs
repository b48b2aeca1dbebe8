use std::collections::BTreeMap;

use libris_core::domain::query::{Page, QueryParams, value_objects::PAGE_PARAM};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Paginated listing envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PaginatedResponse<T> {
    pub count: usize,
    /// Relative link to the next page, `null` on the last page.
    pub next: Option<String>,
    /// Relative link to the previous page, `null` on the first page.
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// `path` is the request path, `params` the request query parameters.
    pub fn from_page(page: Page<T>, path: &str, params: &QueryParams) -> Self {
        let next = page
            .next_page()
            .map(|number| page_link(path, params, number));
        let previous = page
            .previous_page()
            .map(|number| page_link(path, params, number));

        Self {
            count: page.total_count,
            next,
            previous,
            results: page.items,
        }
    }
}

/// Request link with `page` replaced, or dropped for the first page.
pub fn page_link(path: &str, params: &QueryParams, page: usize) -> String {
    let mut values: BTreeMap<&str, String> = params
        .values
        .iter()
        .filter(|(key, _)| key.as_str() != PAGE_PARAM)
        .map(|(key, value)| (key.as_str(), value.clone()))
        .collect();

    if page > 1 {
        values.insert(PAGE_PARAM, page.to_string());
    }

    match serde_urlencoded::to_string(&values) {
        Ok(query) if !query.is_empty() => format!("{path}?{query}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u8>, total_count: usize, number: usize, size: usize) -> Page<u8> {
        Page {
            items,
            total_count,
            page: number,
            page_size: size,
            has_next: number * size < total_count,
            has_previous: number > 1,
        }
    }

    #[test]
    fn test_first_page_links() {
        let params = QueryParams::from_pairs([("page_size", "3")]);
        let response =
            PaginatedResponse::from_page(page(vec![1, 2, 3], 10, 1, 3), "/books", &params);

        assert_eq!(response.count, 10);
        assert_eq!(response.next.as_deref(), Some("/books?page=2&page_size=3"));
        assert_eq!(response.previous, None);
    }

    #[test]
    fn test_second_page_previous_drops_page() {
        let params =
            QueryParams::from_pairs([("page", "2"), ("search", "dune"), ("page_size", "2")]);
        let response = PaginatedResponse::from_page(page(vec![3, 4], 5, 2, 2), "/books", &params);

        assert_eq!(
            response.previous.as_deref(),
            Some("/books?page_size=2&search=dune")
        );
        assert_eq!(
            response.next.as_deref(),
            Some("/books?page=3&page_size=2&search=dune")
        );
    }

    #[test]
    fn test_links_are_percent_encoded() {
        let params = QueryParams::from_pairs([("search", "le guin"), ("page", "2")]);
        assert_eq!(page_link("/authors", &params, 1), "/authors?search=le+guin");
        assert_eq!(page_link("/authors", &QueryParams::new(), 1), "/authors");
    }
}
