//! Blood request entity, urgency, and lifecycle status.

mod model;
mod status;
mod urgency;

pub use model::{BloodRequest, CreateBloodRequest};
pub use status::RequestStatus;
pub use urgency::Urgency;
