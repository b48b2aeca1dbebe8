use super::handlers::create_author::{__path_create_author, create_author};
use super::handlers::get_author::{__path_get_author, get_author};
use super::handlers::get_author_statistics::{
    __path_get_author_statistics, get_author_statistics,
};
use super::handlers::get_authors::{__path_get_authors, get_authors};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_authors, get_author_statistics, get_author, create_author))]
pub struct AuthorApiDoc;

pub fn author_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/authors", state.args.server.root_path),
            get(get_authors).post(create_author),
        )
        .route(
            &format!("{}/authors/stats", state.args.server.root_path),
            get(get_author_statistics),
        )
        .route(
            &format!("{}/authors/{{author_id}}", state.args.server.root_path),
            get(get_author),
        )
}
