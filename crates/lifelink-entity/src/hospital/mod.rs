//! Hospital profile and donor membership entities.

mod model;

pub use model::{HospitalDonorMembership, HospitalProfile};
