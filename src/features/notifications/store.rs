use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::notifications::models::{NewNotification, Notification};

/// Audit sink for alert attempts
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert(&self, data: NewNotification) -> Result<Notification>;

    async fn list_for_report(&self, report_id: Uuid) -> Result<Vec<Notification>>;
}

const NOTIFICATION_COLUMNS: &str = "id, report_id, message, recipient, read, created_at";

pub struct PgNotificationStore {
    pool: PgPool,
}

impl PgNotificationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for PgNotificationStore {
    async fn insert(&self, data: NewNotification) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(&format!(
            "INSERT INTO notifications (id, report_id, message, recipient) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {NOTIFICATION_COLUMNS}"
        ))
        .bind(Uuid::now_v7())
        .bind(data.report_id)
        .bind(&data.message)
        .bind(&data.recipient)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert notification: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(notification)
    }

    async fn list_for_report(&self, report_id: Uuid) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications \
             WHERE report_id = $1 ORDER BY created_at DESC"
        ))
        .bind(report_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list notifications: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(notifications)
    }
}
