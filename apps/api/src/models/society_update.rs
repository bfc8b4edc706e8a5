use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An announcement posted by an admin. No status machine: existence is
/// visibility.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SocietyUpdateRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub created_by: Option<Uuid>,
}
