use std::collections::HashMap;

use sqlx::{QueryBuilder, SqlitePool};
use tracing::warn;

use crate::domain::{DomainError, Email, Participant, ParticipantId, ParticipantStatus};
use crate::models::{ParticipantRow, ParticipantStatusRow};

const SQL_SELECT_ALL_PARTICIPANTS: &str = r#"
SELECT
    id,
    name,
    email,
    status_id
FROM participants
"#;

const SQL_SELECT_PARTICIPANT_BY_ID: &str = r#"
SELECT
    id,
    name,
    email,
    status_id
FROM participants
WHERE id = ?1
"#;

const SQL_SELECT_PARTICIPANT_BY_EMAIL: &str = r#"
SELECT
    id,
    name,
    email,
    status_id
FROM participants
WHERE email = ?1
"#;

const SQL_SELECT_STATUS_BY_ID: &str = r#"
SELECT id, name FROM participant_statuses WHERE id = ?1
"#;

const SQL_SELECT_STATUS_ID_BY_NAME: &str = r#"
SELECT id FROM participant_statuses WHERE name = ?1
"#;

const SQL_UPSERT_PARTICIPANT: &str = r#"
INSERT INTO participants (id, name, email, status_id)
VALUES (?1, ?2, ?3, ?4)
ON CONFLICT(id) DO UPDATE SET
    name = excluded.name,
    email = excluded.email,
    status_id = excluded.status_id
"#;

/// Fetches every participant and reconciles each row against the status
/// lookup table.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Participant>, DomainError> {
    let rows: Vec<ParticipantRow> = sqlx::query_as(SQL_SELECT_ALL_PARTICIPANTS)
        .fetch_all(pool)
        .await?;
    reconcile(pool, rows).await
}

/// Fetches one participant by id. A missing participant row is `NotFound`;
/// a missing status row behind an existing participant is a data-integrity
/// fault, not a lookup miss.
pub async fn find_by_id(
    pool: &SqlitePool,
    id: &ParticipantId,
) -> Result<Participant, DomainError> {
    let row: ParticipantRow = sqlx::query_as(SQL_SELECT_PARTICIPANT_BY_ID)
        .bind(id.value())
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DomainError::NotFound(id.value().to_string()))?;

    reconstruct_single(pool, row).await
}

/// Batched variant of [`find_all`] scoped to the given ids. Ids without a
/// matching row are silently skipped; absence is an expected outcome here.
pub async fn find_by_ids(
    pool: &SqlitePool,
    ids: &[ParticipantId],
) -> Result<Vec<Participant>, DomainError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::new(
        "SELECT id, name, email, status_id FROM participants WHERE id IN (",
    );
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(id.value());
    }
    separated.push_unseparated(")");

    let rows: Vec<ParticipantRow> = query.build_query_as().fetch_all(pool).await?;
    reconcile(pool, rows).await
}

/// Looks a participant up by email. `None` is a normal outcome: this query
/// backs the duplicated-email existence check, not a required fetch.
pub async fn find_by_email(
    pool: &SqlitePool,
    email: &Email,
) -> Result<Option<Participant>, DomainError> {
    let row: Option<ParticipantRow> = sqlx::query_as(SQL_SELECT_PARTICIPANT_BY_EMAIL)
        .bind(email.value())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(reconstruct_single(pool, row).await?)),
        None => Ok(None),
    }
}

/// Upserts the participant, keyed by id: insert when absent, full-column
/// overwrite when present. The status enum is mapped back to its lookup row
/// first; a missing lookup row means the seed data is gone.
pub async fn save(pool: &SqlitePool, participant: &Participant) -> Result<(), DomainError> {
    let label = participant.status().label();
    let status_id: i64 = sqlx::query_scalar(SQL_SELECT_STATUS_ID_BY_NAME)
        .bind(label)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DomainError::StatusLabelMissing(label.to_string()))?;

    sqlx::query(SQL_UPSERT_PARTICIPANT)
        .bind(participant.id().value())
        .bind(participant.name())
        .bind(participant.email().value())
        .bind(status_id)
        .execute(pool)
        .await?;
    Ok(())
}

// In-memory join of participant rows against their status rows. The status
// labels are fetched with one batched query over the referenced ids, then
// each participant is resolved against that map. A participant whose
// status_id has no row is corrupted data and fails the whole call.
async fn reconcile(
    pool: &SqlitePool,
    rows: Vec<ParticipantRow>,
) -> Result<Vec<Participant>, DomainError> {
    let mut status_ids: Vec<i64> = rows.iter().map(|row| row.status_id).collect();
    status_ids.sort_unstable();
    status_ids.dedup();

    let labels = load_status_labels(pool, &status_ids).await?;

    rows.into_iter()
        .map(|row| {
            let label = labels.get(&row.status_id).ok_or_else(|| {
                warn!(
                    "participant {} references missing status row {}",
                    row.id, row.status_id
                );
                DomainError::ReconciliationMismatch {
                    participant_id: row.id.clone(),
                    status_id: row.status_id,
                }
            })?;
            let status = ParticipantStatus::resolve(label)?;
            Ok(Participant::reconstruct(
                ParticipantId::new(row.id),
                row.name,
                Email::new(row.email)?,
                status,
            ))
        })
        .collect()
}

// Single-row counterpart of `reconcile`, used by the id and email lookups.
async fn reconstruct_single(
    pool: &SqlitePool,
    row: ParticipantRow,
) -> Result<Participant, DomainError> {
    let status_row: Option<ParticipantStatusRow> = sqlx::query_as(SQL_SELECT_STATUS_BY_ID)
        .bind(row.status_id)
        .fetch_optional(pool)
        .await?;
    let status_row = status_row.ok_or_else(|| {
        warn!(
            "participant {} references missing status row {}",
            row.id, row.status_id
        );
        DomainError::ReconciliationMismatch {
            participant_id: row.id.clone(),
            status_id: row.status_id,
        }
    })?;

    let status = ParticipantStatus::resolve(&status_row.name)?;
    Ok(Participant::reconstruct(
        ParticipantId::new(row.id),
        row.name,
        Email::new(row.email)?,
        status,
    ))
}

async fn load_status_labels(
    pool: &SqlitePool,
    status_ids: &[i64],
) -> Result<HashMap<i64, String>, DomainError> {
    if status_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut query = QueryBuilder::new("SELECT id, name FROM participant_statuses WHERE id IN (");
    let mut separated = query.separated(", ");
    for status_id in status_ids {
        separated.push_bind(*status_id);
    }
    separated.push_unseparated(")");

    let rows: Vec<ParticipantStatusRow> = query.build_query_as().fetch_all(pool).await?;
    Ok(rows.into_iter().map(|row| (row.id, row.name)).collect())
}
