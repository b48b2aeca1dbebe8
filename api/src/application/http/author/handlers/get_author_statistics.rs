use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use libris_core::domain::author::{entities::AuthorStatistics, ports::AuthorService};

#[utoipa::path(
    get,
    path = "/stats",
    tag = "author",
    summary = "Catalog statistics",
    description = "Totals, publication year bounds and the five authors with the most books.",
    responses(
        (status = 200, body = AuthorStatistics)
    ),
)]
pub async fn get_author_statistics(
    State(state): State<AppState>,
) -> Result<Response<AuthorStatistics>, ApiError> {
    let statistics = state
        .service
        .author_statistics()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(statistics))
}
