//! HTTP request handlers, one module per domain.

pub mod donation;
pub mod donor;
pub mod health;
pub mod hospital;
pub mod notification;
pub mod request;
