use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::comment::{entities::Comment, ports::CommentService};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/comments/{comment_id}",
    tag = "comment",
    summary = "Get comment",
    params(
        ("comment_id" = Uuid, Path, description = "Comment id"),
    ),
    responses(
        (status = 200, body = Comment),
        (status = 404, description = "Comment not found")
    ),
)]
pub async fn get_comment(
    Path(comment_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Comment>, ApiError> {
    let comment = state
        .service
        .get_comment(comment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(comment))
}
