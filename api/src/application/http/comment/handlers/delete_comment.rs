use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::comment::{entities::Comment, ports::CommentService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCommentResponse {
    pub message: String,
    pub deleted_comment: Comment,
}

#[utoipa::path(
    delete,
    path = "/comments/{comment_id}",
    tag = "comment",
    summary = "Delete comment",
    params(
        ("comment_id" = Uuid, Path, description = "Comment id"),
    ),
    responses(
        (status = 200, body = DeleteCommentResponse),
        (status = 404, description = "Comment not found")
    ),
)]
pub async fn delete_comment(
    Path(comment_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCommentResponse>, ApiError> {
    let comment = state
        .service
        .delete_comment(comment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCommentResponse {
        message: "Comment deleted successfully".to_string(),
        deleted_comment: comment,
    }))
}
