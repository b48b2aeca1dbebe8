use super::handlers::create_book::{__path_create_book, create_book};
use super::handlers::delete_book::{__path_delete_book, delete_book};
use super::handlers::get_book::{__path_get_book, get_book};
use super::handlers::get_books::{__path_get_books, get_books};
use super::handlers::patch_book::{__path_patch_book, patch_book};
use super::handlers::search_books::{__path_search_books, search_books};
use super::handlers::update_book::{__path_update_book, update_book};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_books,
    search_books,
    get_book,
    create_book,
    update_book,
    patch_book,
    delete_book
))]
pub struct BookApiDoc;

pub fn book_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/books"), get(get_books).post(create_book))
        .route(&format!("{root_path}/books/search"), get(search_books))
        .route(
            &format!("{root_path}/books/{{book_id}}"),
            get(get_book)
                .put(update_book)
                .patch(patch_book)
                .delete(delete_book),
        )
}
