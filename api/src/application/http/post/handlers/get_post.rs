use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::post::{entities::Post, ports::PostService};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{post_id}",
    tag = "post",
    summary = "Get post",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
    ),
    responses(
        (status = 200, body = Post),
        (status = 404, description = "Post not found")
    ),
)]
pub async fn get_post(
    Path(post_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Post>, ApiError> {
    let post = state
        .service
        .get_post(post_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(post))
}
