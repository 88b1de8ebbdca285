//! Notification read-side handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use uuid::Uuid;

use lifelink_service::notification::NotificationFeedItem;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/notifications/{user_id}
///
/// Each item carries the originating blood request inline when the
/// notification references one.
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<NotificationFeedItem>>>> {
    let notifications = state.notification_service.list(user_id).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/{user_id}/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let count = state.notification_service.unread_count(user_id).await?;
    Ok(Json(ApiResponse::ok(json!({ "unread": count }))))
}

/// PUT /api/notifications/{user_id}/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.notification_service.mark_read(id, user_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Notification marked as read".to_string(),
    })))
}

/// DELETE /api/notifications/{user_id}/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.notification_service.delete(id, user_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Notification deleted".to_string(),
    })))
}
