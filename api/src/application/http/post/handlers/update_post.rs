use crate::application::http::post::validators::UpdatePostValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::post::{entities::Post, ports::PostService, value_objects::UpdatePostInput};
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/{post_id}",
    tag = "post",
    summary = "Replace post",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
    ),
    request_body = UpdatePostValidator,
    responses(
        (status = 200, body = Post),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Post not found")
    ),
)]
pub async fn update_post(
    Path(post_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdatePostValidator>,
) -> Result<Response<Post>, ApiError> {
    let post = state
        .service
        .update_post(
            post_id,
            UpdatePostInput {
                title: Some(payload.title),
                content: Some(payload.content),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(post))
}
