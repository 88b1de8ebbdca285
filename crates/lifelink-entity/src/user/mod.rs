//! User account entity and role enumeration.

mod model;
mod role;

pub use model::User;
pub use role::UserRole;
