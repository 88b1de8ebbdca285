//! Donation lifecycle handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use lifelink_entity::donation::Donation;

use crate::dto::request::UpdateDonationStatusBody;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// PUT /api/donations/{id}/status
///
/// Marking a donation completed for the first time triggers badge
/// awards, badge notifications, and the consent email; those side
/// effects never fail the status update itself.
pub async fn update_status(
    State(state): State<AppState>,
    Path(donation_id): Path<Uuid>,
    Json(body): Json<UpdateDonationStatusBody>,
) -> ApiResult<Json<ApiResponse<Donation>>> {
    let donation = state
        .donation_service
        .update_status(donation_id, body.status)
        .await?;
    Ok(Json(ApiResponse::ok(donation)))
}
