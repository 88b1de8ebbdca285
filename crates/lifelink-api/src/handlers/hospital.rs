//! Hospital recognition and opt-in handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use lifelink_entity::donor::DonorProfile;
use lifelink_entity::hospital::HospitalDonorMembership;
use lifelink_service::recognition::RecognitionStats;

use crate::dto::request::OptInQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/hospitals/{id}/recognition
pub async fn recognition(
    State(state): State<AppState>,
    Path(hospital_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<RecognitionStats>>> {
    let stats = state.recognition_service.stats(hospital_id).await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/hospitals/{id}/donors
pub async fn recognized_donors(
    State(state): State<AppState>,
    Path(hospital_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<DonorProfile>>>> {
    let donors = state.hospital_service.recognized_donors(hospital_id).await?;
    Ok(Json(ApiResponse::ok(donors)))
}

/// GET /api/hospitals/{id}/opt-in?token=...
///
/// Landing endpoint for the consent email link. Verifies the signed
/// token and records the donor's consent for this hospital.
pub async fn opt_in(
    State(state): State<AppState>,
    Path(hospital_id): Path<Uuid>,
    Query(query): Query<OptInQuery>,
) -> ApiResult<Json<ApiResponse<HospitalDonorMembership>>> {
    let membership = state
        .hospital_service
        .record_opt_in(hospital_id, &query.token)
        .await?;
    Ok(Json(ApiResponse::ok(membership)))
}
