//! Blood request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use lifelink_entity::request::BloodRequest;
use lifelink_service::fanout::{FanoutOutcome, SubmitBloodRequest};

use crate::dto::request::{CreateRequestBody, UpdateRequestStatusBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/requests
///
/// Submits a blood request and fans out donor notifications. SMS
/// dispatch (critical requests only) happens after the response-visible
/// transaction and never affects the outcome.
pub async fn create_request(
    State(state): State<AppState>,
    Json(body): Json<CreateRequestBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<FanoutOutcome>>)> {
    let outcome = state
        .fanout_service
        .create_blood_request(SubmitBloodRequest {
            hospital_id: body.hospital_id,
            blood_type: body.blood_type,
            units_needed: body.units_needed,
            urgency: body.urgency,
            patient_condition: body.patient_condition,
            contact_person: body.contact_person,
            contact_phone: body.contact_phone,
            additional_notes: body.additional_notes,
            expiry_date: body.expiry_date,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(outcome))))
}

/// GET /api/requests/active
pub async fn list_active(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<BloodRequest>>>> {
    let requests = state.fanout_service.active_requests().await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// PUT /api/requests/{id}/status
///
/// Lifecycle transitions are monotonic: only `active` requests can be
/// marked `fulfilled` or `expired`.
pub async fn update_status(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
    Json(body): Json<UpdateRequestStatusBody>,
) -> ApiResult<Json<ApiResponse<BloodRequest>>> {
    let request = state
        .fanout_service
        .update_request_status(request_id, body.status)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}
