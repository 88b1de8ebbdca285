//! # lifelink-notify
//!
//! Outbound SMS and email delivery. Providers are black boxes behind
//! the [`sms::SmsSender`] and [`email::EmailSender`] traits; the rest
//! of the system only sees per-recipient success/failure results.

pub mod email;
pub mod phone;
pub mod sms;
pub mod template;

pub use email::EmailSender;
pub use sms::{SmsBatchOutcome, SmsRecipient, SmsSender, SmsService};
