use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::author::{entities::AuthorDetail, ports::AuthorService};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{author_id}",
    tag = "author",
    summary = "Get author",
    description = "Retrieves an author with their books and publication year range.",
    params(
        ("author_id" = Uuid, Path, description = "Author id"),
    ),
    responses(
        (status = 200, body = AuthorDetail),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn get_author(
    Path(author_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<AuthorDetail>, ApiError> {
    let author = state
        .service
        .get_author(author_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(author))
}
