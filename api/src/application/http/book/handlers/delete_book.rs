use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::book::ports::BookService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeletedBook {
    pub id: Uuid,
    pub title: String,
    /// Author name
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteBookResponse {
    pub message: String,
    pub deleted_book: DeletedBook,
}

#[utoipa::path(
    delete,
    path = "/{book_id}",
    tag = "book",
    summary = "Delete book",
    params(
        ("book_id" = Uuid, Path, description = "Book id"),
    ),
    responses(
        (status = 200, body = DeleteBookResponse),
        (status = 404, description = "Book not found")
    ),
)]
pub async fn delete_book(
    Path(book_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteBookResponse>, ApiError> {
    let book = state
        .service
        .delete_book(book_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteBookResponse {
        message: "Book deleted successfully".to_string(),
        deleted_book: DeletedBook {
            id: book.id,
            title: book.title,
            author: book.author_name,
        },
    }))
}
