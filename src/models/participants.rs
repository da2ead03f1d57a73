#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipantRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status_id: i64,
}
