use super::handlers::create_post::{__path_create_post, create_post};
use super::handlers::delete_post::{__path_delete_post, delete_post};
use super::handlers::get_post::{__path_get_post, get_post};
use super::handlers::get_posts::{__path_get_posts, get_posts};
use super::handlers::patch_post::{__path_patch_post, patch_post};
use super::handlers::update_post::{__path_update_post, update_post};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_posts, get_post, create_post, update_post, patch_post, delete_post))]
pub struct PostApiDoc;

pub fn post_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/posts", state.args.server.root_path),
            get(get_posts).post(create_post),
        )
        .route(
            &format!("{}/posts/{{post_id}}", state.args.server.root_path),
            get(get_post)
                .put(update_post)
                .patch(patch_post)
                .delete(delete_post),
        )
}
