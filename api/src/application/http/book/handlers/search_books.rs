use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use libris_core::domain::book::{entities::BookSearchResult, ports::BookService};
use serde::Deserialize;
use utoipa::IntoParams;

/// Describes the query parameters read by `QueryParamsExtractor`, for the OpenAPI docs.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchBooksQuery {
    /// Search term matched against title and author name
    pub q: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "book",
    summary = "Search books",
    description = "Free-text book search bounded by an optional year range. Results use the default ordering and are capped at the configured search limit.",
    params(SearchBooksQuery),
    responses(
        (status = 200, body = BookSearchResult)
    ),
)]
pub async fn search_books(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<BookSearchResult>, ApiError> {
    let result = state
        .service
        .search_books(query_params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
