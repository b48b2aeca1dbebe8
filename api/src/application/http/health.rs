use axum::{Router, extract::State, routing::get};
use libris_core::domain::health::{entities::StoreHealthStatus, ports::HealthCheckService};
use utoipa::OpenApi;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Store readiness",
    description = "Reports whether the store answers, with the number of records it holds.",
    responses(
        (status = 200, body = StoreHealthStatus)
    ),
)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Response<StoreHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
