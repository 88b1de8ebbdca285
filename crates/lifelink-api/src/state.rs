//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use lifelink_core::config::AppConfig;
use lifelink_database::DatabasePool;
use lifelink_service::badge::BadgeService;
use lifelink_service::donation::DonationService;
use lifelink_service::fanout::FanoutService;
use lifelink_service::hospital::HospitalService;
use lifelink_service::notification::NotificationService;
use lifelink_service::recognition::RecognitionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// cheap to clone across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool wrapper, used by the health check.
    pub db: DatabasePool,
    /// Blood-request fan-out engine.
    pub fanout_service: FanoutService,
    /// Badge/progress engine.
    pub badge_service: BadgeService,
    /// Hospital recognition aggregator.
    pub recognition_service: RecognitionService,
    /// Notification read-side.
    pub notification_service: NotificationService,
    /// Donation lifecycle and completion workflow.
    pub donation_service: DonationService,
    /// Hospital profiles and opt-in flow.
    pub hospital_service: HospitalService,
}

impl AppState {
    /// The raw sqlx pool.
    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }
}
