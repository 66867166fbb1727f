use chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
