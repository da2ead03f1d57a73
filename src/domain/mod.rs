pub mod email;
pub mod error;
pub mod id;
pub mod participant;
pub mod status;

pub use email::Email;
pub use error::DomainError;
pub use id::ParticipantId;
pub use participant::Participant;
pub use status::ParticipantStatus;
