use thiserror::Error;

/// Failures surfaced by the roster core. None of these are retried locally:
/// `NotFound` is a caller error, the status/reconciliation variants are
/// data-integrity faults that must stay visible, and `Database` transports
/// the underlying storage error (including unique-index violations).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("participant not found. id: {0}")]
    NotFound(String),

    #[error("invalid status text. given: {0}")]
    InvalidStatus(String),

    #[error("participant {participant_id} references missing status row {status_id}")]
    ReconciliationMismatch {
        participant_id: String,
        status_id: i64,
    },

    #[error("no status row for label: {0}")]
    StatusLabelMissing(String),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("participant name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
