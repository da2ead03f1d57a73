#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipantStatusRow {
    pub id: i64,
    pub name: String,
}
