use crate::application::http::book::validators::UpdateBookValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::book::{
    entities::Book, ports::BookService, value_objects::UpdateBookInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateBookResponse {
    pub message: String,
    pub book: Book,
}

#[utoipa::path(
    put,
    path = "/{book_id}",
    tag = "book",
    summary = "Replace book",
    description = "Replaces title, publication year and author of a book.",
    params(
        ("book_id" = Uuid, Path, description = "Book id"),
    ),
    request_body = UpdateBookValidator,
    responses(
        (status = 200, body = UpdateBookResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Book or author not found"),
        (status = 409, description = "Book already exists")
    ),
)]
pub async fn update_book(
    Path(book_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateBookValidator>,
) -> Result<Response<UpdateBookResponse>, ApiError> {
    let book = state
        .service
        .update_book(
            book_id,
            UpdateBookInput {
                title: Some(payload.title),
                publication_year: Some(payload.publication_year),
                author_id: Some(payload.author),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateBookResponse {
        message: "Book updated successfully".to_string(),
        book,
    }))
}
