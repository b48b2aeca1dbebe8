use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::book::{entities::BookDetail, ports::BookService};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{book_id}",
    tag = "book",
    summary = "Get book",
    description = "Retrieves a book with up to five other books by the same author.",
    params(
        ("book_id" = Uuid, Path, description = "Book id"),
    ),
    responses(
        (status = 200, body = BookDetail),
        (status = 404, description = "Book not found")
    ),
)]
pub async fn get_book(
    Path(book_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<BookDetail>, ApiError> {
    let book = state
        .service
        .get_book(book_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(book))
}
