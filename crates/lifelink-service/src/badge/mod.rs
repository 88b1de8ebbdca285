//! Badge/progress engine: tier table, streak computation, and the
//! idempotent award service.

mod service;
mod streak;
mod tiers;

pub use service::{BadgeService, BadgeSnapshot};
pub use streak::consecutive_month_streak;
pub use tiers::{DonorMetrics, evaluate_tiers};
