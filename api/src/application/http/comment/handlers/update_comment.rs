use crate::application::http::comment::validators::UpdateCommentValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::comment::{
    entities::Comment, ports::CommentService, value_objects::UpdateCommentInput,
};
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/comments/{comment_id}",
    tag = "comment",
    summary = "Update comment",
    params(
        ("comment_id" = Uuid, Path, description = "Comment id"),
    ),
    request_body = UpdateCommentValidator,
    responses(
        (status = 200, body = Comment),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Comment not found")
    ),
)]
pub async fn update_comment(
    Path(comment_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCommentValidator>,
) -> Result<Response<Comment>, ApiError> {
    let comment = state
        .service
        .update_comment(
            comment_id,
            UpdateCommentInput {
                content: payload.content,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(comment))
}
