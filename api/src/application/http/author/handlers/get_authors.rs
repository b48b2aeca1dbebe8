use crate::application::http::pagination::PaginatedResponse;
use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{OriginalUri, State};
use libris_core::domain::author::{entities::AuthorOverview, ports::AuthorService};
use serde::Deserialize;
use utoipa::IntoParams;

/// Describes the query parameters read by `QueryParamsExtractor`, for the OpenAPI docs.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetAuthorsQuery {
    /// Free-text search over the author name
    pub search: Option<String>,
    /// Exact name
    pub name: Option<String>,
    /// Name contains (ignore case)
    pub name_contains: Option<String>,
    /// Authors with at least this many books
    pub min_books: Option<String>,
    /// `name` or `book_count`, `-` for descending
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "author",
    summary = "List authors",
    description = "Lists authors with their book count.",
    params(GetAuthorsQuery),
    responses(
        (status = 200, body = PaginatedResponse<AuthorOverview>)
    ),
)]
pub async fn get_authors(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<PaginatedResponse<AuthorOverview>>, ApiError> {
    let page = state
        .service
        .list_authors(query_params.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PaginatedResponse::from_page(
        page,
        uri.path(),
        &query_params,
    )))
}
