use super::handlers::get_member::{__path_get_member, get_member};
use super::handlers::get_member_feed::{__path_get_member_feed, get_member_feed};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_member, get_member_feed))]
pub struct MemberApiDoc;

pub fn member_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/members/{{member_id}}", state.args.server.root_path),
            get(get_member),
        )
        .route(
            &format!("{}/members/{{member_id}}/feed", state.args.server.root_path),
            get(get_member_feed),
        )
}
