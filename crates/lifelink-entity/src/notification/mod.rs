//! In-app notification entities.

mod model;

pub use model::{NewNotification, Notification, NotificationKind};
