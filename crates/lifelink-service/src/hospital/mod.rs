//! Hospital profiles, opt-in consent tokens, and recognized-donor
//! listing.

mod opt_in;
mod service;

pub use opt_in::{OptInClaims, OptInTokens};
pub use service::HospitalService;
