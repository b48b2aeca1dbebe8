use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use libris_core::domain::member::{entities::MemberProfile, ports::MemberService};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{member_id}",
    tag = "member",
    summary = "Get member",
    description = "Retrieves a member profile with who they follow and who follows them.",
    params(
        ("member_id" = Uuid, Path, description = "Member id"),
    ),
    responses(
        (status = 200, body = MemberProfile),
        (status = 404, description = "Member not found")
    ),
)]
pub async fn get_member(
    Path(member_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<MemberProfile>, ApiError> {
    let member = state
        .service
        .get_member(member_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(member))
}
