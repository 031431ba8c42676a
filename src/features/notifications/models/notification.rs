use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Audit record for an alert attempt, created once and never mutated
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub report_id: Uuid,
    pub message: String,
    /// Comma-joined recipient list (municipality, NGOs)
    pub recipient: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub report_id: Uuid,
    pub message: String,
    pub recipient: String,
}
