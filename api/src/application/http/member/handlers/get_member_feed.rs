use crate::application::http::pagination::PaginatedResponse;
use crate::application::http::post::handlers::get_posts::GetPostsQuery;
use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{OriginalUri, Path, State};
use libris_core::domain::post::{entities::Post, ports::PostService};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{member_id}/feed",
    tag = "member",
    summary = "Member feed",
    description = "Posts written by the members this member follows, newest first unless ordered otherwise.",
    params(
        ("member_id" = Uuid, Path, description = "Member id"),
        GetPostsQuery
    ),
    responses(
        (status = 200, body = PaginatedResponse<Post>),
        (status = 404, description = "Member not found")
    ),
)]
pub async fn get_member_feed(
    Path(member_id): Path<Uuid>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<PaginatedResponse<Post>>, ApiError> {
    let page = state
        .service
        .get_feed(member_id, query_params.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PaginatedResponse::from_page(
        page,
        uri.path(),
        &query_params,
    )))
}
