use crate::application::http::pagination::PaginatedResponse;
use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{OriginalUri, State};
use libris_core::domain::post::{entities::Post, ports::PostService};
use serde::Deserialize;
use utoipa::IntoParams;

/// Describes the query parameters read by `QueryParamsExtractor`, for the OpenAPI docs.
/// Also accepted by the member feed.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetPostsQuery {
    /// Free-text search over title and content
    pub search: Option<String>,
    /// Author member id
    pub author: Option<String>,
    /// Author username contains (ignore case)
    pub author_username: Option<String>,
    /// Created at or after, RFC 3339 or `YYYY-MM-DD`
    pub created_after: Option<String>,
    /// Created at or before, RFC 3339 or `YYYY-MM-DD`
    pub created_before: Option<String>,
    /// Comma separated keys among `created_at`, `title`, `author_username`; `-` for descending
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "post",
    summary = "List posts",
    params(GetPostsQuery),
    responses(
        (status = 200, body = PaginatedResponse<Post>)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<PaginatedResponse<Post>>, ApiError> {
    let page = state
        .service
        .list_posts(query_params.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PaginatedResponse::from_page(
        page,
        uri.path(),
        &query_params,
    )))
}
