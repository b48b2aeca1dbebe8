use crate::application::http::pagination::PaginatedResponse;
use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{OriginalUri, State};
use libris_core::domain::book::{entities::Book, ports::BookService};
use serde::Deserialize;
use utoipa::IntoParams;

/// Describes the query parameters read by `QueryParamsExtractor`, for the OpenAPI docs.
/// Anything else is ignored.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetBooksQuery {
    /// Free-text search over title and author name
    pub search: Option<String>,
    /// Exact title
    pub title: Option<String>,
    /// Title contains (ignore case)
    pub title_contains: Option<String>,
    /// Author id
    pub author: Option<String>,
    /// Author name contains (ignore case)
    pub author_name: Option<String>,
    pub publication_year: Option<String>,
    /// Published in or after this year, alias `min_year`
    pub year_from: Option<String>,
    /// Published in or before this year, alias `max_year`
    pub year_to: Option<String>,
    /// Comma separated keys among `publication_year`, `title`, `author_name`; `-` for descending
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "book",
    summary = "List books",
    description = "Lists books with optional filters, free-text search, ordering and pagination. Malformed or unknown parameters are ignored.",
    params(GetBooksQuery),
    responses(
        (status = 200, body = PaginatedResponse<Book>)
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<PaginatedResponse<Book>>, ApiError> {
    let page = state
        .service
        .list_books(query_params.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PaginatedResponse::from_page(
        page,
        uri.path(),
        &query_params,
    )))
}
