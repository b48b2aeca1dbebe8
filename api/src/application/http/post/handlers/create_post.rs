use crate::application::http::post::validators::CreatePostValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use libris_core::domain::post::{entities::Post, ports::PostService, value_objects::CreatePostInput};

#[utoipa::path(
    post,
    path = "",
    tag = "post",
    summary = "Create post",
    description = "Publishes a post on behalf of an existing member.",
    request_body = CreatePostValidator,
    responses(
        (status = 201, body = Post),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Member not found")
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreatePostValidator>,
) -> Result<Response<Post>, ApiError> {
    let post = state
        .service
        .create_post(CreatePostInput {
            author_id: payload.author,
            title: payload.title,
            content: payload.content,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(post))
}
