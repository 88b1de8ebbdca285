//! Donation record entity and aggregates.

mod model;

pub use model::{Donation, DonationAggregates, DonationStatus, IMPACT_PER_UNIT};
