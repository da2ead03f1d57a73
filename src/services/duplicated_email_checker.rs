use sqlx::SqlitePool;

use crate::database::participant_repo;
use crate::domain::{DomainError, Email};

/// Advisory pre-check for the "email must be unique" rule, used before
/// admitting a new participant. A concurrent registration can still slip
/// between this check and the save; the UNIQUE index on participants.email
/// is the real guarantee.
pub async fn is_duplicated(pool: &SqlitePool, email: &Email) -> Result<bool, DomainError> {
    let participant = participant_repo::find_by_email(pool, email).await?;
    Ok(participant.is_some())
}
