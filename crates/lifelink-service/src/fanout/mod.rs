//! Blood-request notification fan-out: eligibility partitioning and the
//! two-phase commit/dispatch engine.

mod eligibility;
mod service;

pub use eligibility::{TargetPartition, partition_targets};
pub use service::{FanoutOutcome, FanoutService, SubmitBloodRequest};
