//! Hospital recognition aggregator: points table and read-side rollups.

mod points;
mod service;

pub use points::points_for_keys;
pub use service::{RecognitionService, RecognitionStats, TopDonor};
