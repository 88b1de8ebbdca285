//! # lifelink-service
//!
//! Business logic for LifeLink: the blood-request notification fan-out
//! engine, the badge/progress engine, the hospital recognition
//! aggregator, the donation completion workflow, and the notification
//! read-side. Services hold `Arc`-wrapped repositories and never touch
//! global state.

pub mod badge;
pub mod donation;
pub mod fanout;
pub mod hospital;
pub mod notification;
pub mod recognition;
