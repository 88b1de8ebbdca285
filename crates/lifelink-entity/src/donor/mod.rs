//! Donor profile entities.

mod model;

pub use model::{DonorCandidate, DonorProfile};
