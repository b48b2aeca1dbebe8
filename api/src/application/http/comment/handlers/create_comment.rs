use crate::application::http::comment::validators::CreateCommentValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::comment::{
    entities::Comment, ports::CommentService, value_objects::CreateCommentInput,
};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/posts/{post_id}/comments",
    tag = "comment",
    summary = "Create comment",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
    ),
    request_body = CreateCommentValidator,
    responses(
        (status = 201, body = Comment),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Post or member not found")
    ),
)]
pub async fn create_comment(
    Path(post_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCommentValidator>,
) -> Result<Response<Comment>, ApiError> {
    let comment = state
        .service
        .create_comment(
            post_id,
            CreateCommentInput {
                author_id: payload.author,
                content: payload.content,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(comment))
}
