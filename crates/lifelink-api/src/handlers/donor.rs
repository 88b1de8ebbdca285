//! Donor badge handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use lifelink_entity::badge::EarnedBadge;
use lifelink_service::badge::BadgeSnapshot;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/donors/{id}/badges
///
/// Earned badges plus live progress toward the next tiers, computed
/// from donation aggregates on every call.
pub async fn badges(
    State(state): State<AppState>,
    Path(donor_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<BadgeSnapshot>>> {
    let snapshot = state.badge_service.compute_progress(donor_id).await?;
    Ok(Json(ApiResponse::ok(snapshot)))
}

/// POST /api/donors/{id}/badges/refresh
///
/// Re-evaluates tiers and persists any newly crossed ones. Returns
/// only the badges actually created by this call.
pub async fn refresh_badges(
    State(state): State<AppState>,
    Path(donor_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<EarnedBadge>>>> {
    let awarded = state.badge_service.award_new_badges(donor_id).await?;
    Ok(Json(ApiResponse::ok(awarded)))
}
