use crate::application::http::author::validators::CreateAuthorValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use libris_core::domain::author::{
    entities::Author, ports::AuthorService, value_objects::CreateAuthorInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "author",
    summary = "Create author",
    request_body = CreateAuthorValidator,
    responses(
        (status = 201, body = Author),
        (status = 400, description = "Invalid payload")
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateAuthorValidator>,
) -> Result<Response<Author>, ApiError> {
    let author = state
        .service
        .create_author(CreateAuthorInput { name: payload.name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(author))
}
