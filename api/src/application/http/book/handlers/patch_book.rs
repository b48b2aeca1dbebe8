use crate::application::http::book::handlers::update_book::UpdateBookResponse;
use crate::application::http::book::validators::PatchBookValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::book::{ports::BookService, value_objects::UpdateBookInput};
use uuid::Uuid;

#[utoipa::path(
    patch,
    path = "/{book_id}",
    tag = "book",
    summary = "Update book",
    description = "Partially updates a book. Omitted fields keep their value.",
    params(
        ("book_id" = Uuid, Path, description = "Book id"),
    ),
    request_body = PatchBookValidator,
    responses(
        (status = 200, body = UpdateBookResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Book or author not found"),
        (status = 409, description = "Book already exists")
    ),
)]
pub async fn patch_book(
    Path(book_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PatchBookValidator>,
) -> Result<Response<UpdateBookResponse>, ApiError> {
    let book = state
        .service
        .update_book(
            book_id,
            UpdateBookInput {
                title: payload.title,
                publication_year: payload.publication_year,
                author_id: payload.author,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateBookResponse {
        message: "Book updated successfully".to_string(),
        book,
    }))
}
