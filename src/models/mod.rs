pub mod participant_statuses;
pub mod participants;

pub use participant_statuses::ParticipantStatusRow;
pub use participants::ParticipantRow;
