use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Outreach state of a connect request. The only admin mutation is the
/// one-way transition `pending -> contacted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "connect_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConnectStatus {
    Pending,
    Contacted,
}

/// A Samaj Foundation outreach intake record, one row in
/// `samaj_connect_requests`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConnectRequestRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub age: i32,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub state: String,
    pub district: String,
    pub block_tehsil: String,
    pub status: ConnectStatus,
}
