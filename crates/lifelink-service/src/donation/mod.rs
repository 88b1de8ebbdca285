//! Donation lifecycle, including the completion workflow.

mod service;

pub use service::DonationService;
