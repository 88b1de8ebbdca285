//! Application builder — wires repositories, services, and router into
//! a running Axum server.

use std::sync::Arc;

use lifelink_core::config::AppConfig;
use lifelink_core::error::AppError;
use lifelink_database::DatabasePool;
use lifelink_database::repositories::{
    BadgeRepository, DonationRepository, DonorRepository, HospitalRepository,
    NotificationRepository, RecognitionRepository, RequestRepository, SmsLogRepository,
    UserRepository,
};
use lifelink_notify::SmsService;
use lifelink_notify::email::sender_from_config;
use lifelink_service::badge::BadgeService;
use lifelink_service::donation::DonationService;
use lifelink_service::fanout::FanoutService;
use lifelink_service::hospital::{HospitalService, OptInTokens};
use lifelink_service::notification::NotificationService;
use lifelink_service::recognition::RecognitionService;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the LifeLink server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    tracing::info!("Starting LifeLink server...");

    let pool = db.pool().clone();

    // ── Step 1: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let donor_repo = Arc::new(DonorRepository::new(pool.clone()));
    let hospital_repo = Arc::new(HospitalRepository::new(pool.clone()));
    let request_repo = Arc::new(RequestRepository::new(pool.clone()));
    let donation_repo = Arc::new(DonationRepository::new(pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(pool.clone()));
    let badge_repo = Arc::new(BadgeRepository::new(pool.clone()));
    let recognition_repo = Arc::new(RecognitionRepository::new(pool.clone()));
    let sms_log_repo = Arc::new(SmsLogRepository::new(pool.clone()));

    // ── Step 2: Initialize outbound channels ─────────────────────
    let sms_service = SmsService::from_config(&config.sms, Arc::clone(&sms_log_repo));
    let email_sender = sender_from_config(&config.email);
    let opt_in_tokens = OptInTokens::new(&config.opt_in);

    // ── Step 3: Initialize services ──────────────────────────────
    let fanout_service = FanoutService::new(
        Arc::clone(&request_repo),
        Arc::clone(&donor_repo),
        Arc::clone(&hospital_repo),
        sms_service,
    );
    let badge_service = BadgeService::new(
        Arc::clone(&donation_repo),
        Arc::clone(&donor_repo),
        Arc::clone(&badge_repo),
    );
    let recognition_service = RecognitionService::new(Arc::clone(&recognition_repo));
    let notification_service = NotificationService::new(
        Arc::clone(&notification_repo),
        Arc::clone(&request_repo),
    );
    let hospital_service = HospitalService::new(
        Arc::clone(&hospital_repo),
        opt_in_tokens,
        config.server.public_base_url.clone(),
    );
    let donation_service = DonationService::new(
        Arc::clone(&donation_repo),
        Arc::clone(&user_repo),
        Arc::clone(&hospital_repo),
        Arc::clone(&notification_repo),
        badge_service.clone(),
        hospital_service.clone(),
        email_sender,
    );

    // ── Step 4: Build state and router ───────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        db,
        fanout_service,
        badge_service,
        recognition_service,
        notification_service,
        donation_service,
        hospital_service,
    };

    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LifeLink server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
