use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

// Schema + seed data. Idempotent so it can run at every startup. The UNIQUE
// index on email is the backstop for concurrent registrations: the
// duplicated-email pre-check cannot close the race on its own.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS participant_statuses (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS participants (
    id        TEXT PRIMARY KEY,
    name      TEXT NOT NULL,
    email     TEXT NOT NULL UNIQUE,
    status_id INTEGER NOT NULL REFERENCES participant_statuses(id)
);

INSERT OR IGNORE INTO participant_statuses (id, name) VALUES
    (1, 'ACTIVE'),
    (2, 'STAY_AWAY'),
    (3, 'RESIGNED');
"#;

/// Opens the process-wide pool and applies the schema. Called once at
/// startup; the pool is then passed by reference to every repository and
/// service call.
pub async fn connect(database_url: &str) -> sqlx::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new().connect(database_url).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Applies schema and seed rows to an already constructed pool.
pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_applies_schema_and_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("roster.db").display());

        // Connecting twice must not duplicate seed rows.
        let pool = connect(&url).await.unwrap();
        drop(pool);
        let pool = connect(&url).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM participant_statuses")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 3);
    }
}
