use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::notifications::models::{NewNotification, Notification};
use crate::features::notifications::store::NotificationStore;
use crate::features::notifications::transport::MailTransport;
use crate::features::reports::models::{Report, Severity};
use crate::shared::constants::ALERT_SUBJECT;

/// Fire-and-forget alert dispatch for high-severity reports
///
/// An audit row is written before the delivery attempt, so a mail outage
/// still leaves a durable trace. There is no retry and no delivery
/// confirmation; callers are expected to log-and-swallow any error.
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    transport: Arc<dyn MailTransport>,
    recipients: Vec<String>,
}

impl NotificationService {
    pub fn new(
        store: Arc<dyn NotificationStore>,
        transport: Arc<dyn MailTransport>,
        recipients: Vec<String>,
    ) -> Self {
        Self {
            store,
            transport,
            recipients,
        }
    }

    /// Sends an alert if the report is high severity; no-op otherwise
    pub async fn notify_if_needed(&self, report: &Report) -> Result<()> {
        if report.severity != Severity::High {
            return Ok(());
        }

        if self.recipients.is_empty() {
            tracing::warn!(
                "High-severity report {} but no alert recipients configured",
                report.id
            );
            return Ok(());
        }

        let message = alert_message(report);

        self.store
            .insert(NewNotification {
                report_id: report.id,
                message: message.clone(),
                recipient: self.recipients.join(", "),
            })
            .await?;

        if let Err(e) = self
            .transport
            .send(&self.recipients, ALERT_SUBJECT, &message)
            .await
        {
            // Mail outage must never fail report creation
            tracing::warn!("Alert delivery failed for report {}: {}", report.id, e);
        }

        Ok(())
    }

    pub async fn list_for_report(&self, report_id: Uuid) -> Result<Vec<Notification>> {
        self.store.list_for_report(report_id).await
    }
}

fn alert_message(report: &Report) -> String {
    format!(
        "A high severity dog incident has been reported!\n\n\
         Location: {}\n\
         Dogs sighted: {}\n\
         Description: {}\n\
         Contact: {}",
        report.location, report.dog_count, report.description, report.contact_number
    )
}
