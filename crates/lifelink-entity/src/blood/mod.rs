//! Blood type enumeration and the ABO/Rh transfusion compatibility table.

mod types;

pub use types::BloodType;
