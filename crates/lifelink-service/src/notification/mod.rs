//! Notification read-side service.

mod service;

pub use service::{NotificationFeedItem, NotificationService};
