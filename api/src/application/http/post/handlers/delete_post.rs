use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::post::{entities::Post, ports::PostService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeletePostResponse {
    pub message: String,
    pub deleted_post: Post,
}

#[utoipa::path(
    delete,
    path = "/{post_id}",
    tag = "post",
    summary = "Delete post",
    description = "Deletes a post and its comments.",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
    ),
    responses(
        (status = 200, body = DeletePostResponse),
        (status = 404, description = "Post not found")
    ),
)]
pub async fn delete_post(
    Path(post_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeletePostResponse>, ApiError> {
    let post = state
        .service
        .delete_post(post_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeletePostResponse {
        message: "Post deleted successfully".to_string(),
        deleted_post: post,
    }))
}
