use std::collections::HashMap;
use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use libris_core::domain::query::QueryParams;
use tracing::debug;

/// Extractor for the raw filter, search, ordering and pagination parameters.
///
/// Never rejects: a query string that cannot be decoded is treated as empty.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryParamsExtractor(query_params): QueryParamsExtractor,
/// ) -> Result<Response<PaginatedResponse<Book>>, ApiError> {
///     // hand query_params to the service
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> = serde_urlencoded::from_str(query_string)
            .unwrap_or_else(|e| {
                debug!("ignoring undecodable query string: {e}");
                HashMap::new()
            });

        Ok(QueryParamsExtractor(QueryParams::from_query_map(&query_map)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> QueryParams {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let QueryParamsExtractor(params) =
            QueryParamsExtractor::from_request_parts(&mut parts, &())
                .await
                .unwrap();
        params
    }

    #[tokio::test]
    async fn test_percent_encoded_values_are_decoded() {
        let params = extract("/books?search=le%20guin&ordering=-publication_year,title").await;

        assert_eq!(params.search_term(), Some("le guin"));
        assert_eq!(params.ordering.sorts.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_query_string_is_empty() {
        let params = extract("/books").await;
        assert!(params.values.is_empty());
        assert!(params.ordering.is_empty());
    }
}
