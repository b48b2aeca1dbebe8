use crate::application::http::pagination::PaginatedResponse;
use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{OriginalUri, Path, State};
use libris_core::domain::comment::{entities::Comment, ports::CommentService};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

/// Describes the query parameters read by `QueryParamsExtractor`, for the OpenAPI docs.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetCommentsQuery {
    /// Free-text search over the comment content
    pub search: Option<String>,
    /// Author member id
    pub author: Option<String>,
    /// Author username contains (ignore case)
    pub author_username: Option<String>,
    /// Created at or after, RFC 3339 or `YYYY-MM-DD`
    pub created_after: Option<String>,
    /// Created at or before, RFC 3339 or `YYYY-MM-DD`
    pub created_before: Option<String>,
    /// `created_at` or `author_username`, `-` for descending
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[utoipa::path(
    get,
    path = "/posts/{post_id}/comments",
    tag = "comment",
    summary = "List comments",
    description = "Comments under a post, newest first unless ordered otherwise.",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
        GetCommentsQuery
    ),
    responses(
        (status = 200, body = PaginatedResponse<Comment>),
        (status = 404, description = "Post not found")
    ),
)]
pub async fn get_comments(
    Path(post_id): Path<Uuid>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<PaginatedResponse<Comment>>, ApiError> {
    let page = state
        .service
        .list_comments(post_id, query_params.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PaginatedResponse::from_page(
        page,
        uri.path(),
        &query_params,
    )))
}
