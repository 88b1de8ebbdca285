//! Donor badge entities: persisted awards and computed progress.

mod model;

pub use model::{BadgeProgress, DonorBadge, EarnedBadge};
