use super::handlers::create_comment::{__path_create_comment, create_comment};
use super::handlers::delete_comment::{__path_delete_comment, delete_comment};
use super::handlers::get_comment::{__path_get_comment, get_comment};
use super::handlers::get_comments::{__path_get_comments, get_comments};
use super::handlers::update_comment::{__path_update_comment, update_comment};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

/// Paths are absolute: comments live under both `/posts` and `/comments`.
#[derive(OpenApi)]
#[openapi(paths(get_comments, create_comment, get_comment, update_comment, delete_comment))]
pub struct CommentApiDoc;

pub fn comment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/posts/{{post_id}}/comments", state.args.server.root_path),
            get(get_comments).post(create_comment),
        )
        .route(
            &format!("{}/comments/{{comment_id}}", state.args.server.root_path),
            get(get_comment).put(update_comment).delete(delete_comment),
        )
}
