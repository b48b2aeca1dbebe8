use crate::application::http::book::validators::CreateBookValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use libris_core::domain::book::{
    entities::Book, ports::BookService, value_objects::CreateBookInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateBookResponse {
    pub message: String,
    pub book: Book,
}

#[utoipa::path(
    post,
    path = "",
    tag = "book",
    summary = "Create book",
    description = "Adds a book to the catalog. The same title, author and year can only exist once.",
    request_body = CreateBookValidator,
    responses(
        (status = 201, body = CreateBookResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Book already exists")
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateBookValidator>,
) -> Result<Response<CreateBookResponse>, ApiError> {
    let book = state
        .service
        .create_book(CreateBookInput {
            title: payload.title,
            publication_year: payload.publication_year,
            author_id: payload.author,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateBookResponse {
        message: "Book created successfully".to_string(),
        book,
    }))
}
