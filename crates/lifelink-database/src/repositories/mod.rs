//! Concrete repository implementations, one per aggregate.

pub mod badge;
pub mod donation;
pub mod donor;
pub mod hospital;
pub mod notification;
pub mod recognition;
pub mod request;
pub mod sms_log;
pub mod user;

pub use badge::BadgeRepository;
pub use donation::DonationRepository;
pub use donor::DonorRepository;
pub use hospital::HospitalRepository;
pub use notification::NotificationRepository;
pub use recognition::RecognitionRepository;
pub use request::RequestRepository;
pub use sms_log::SmsLogRepository;
pub use user::UserRepository;
