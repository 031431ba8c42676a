use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::notifications::NotificationService;
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::{Report, ReportFilter, ReportStatus};
use crate::features::reports::services::TransitionPolicy;
use crate::features::reports::store::ReportStore;
use crate::shared::constants::MAX_PHOTOS_PER_REPORT;

/// Orchestrates the report lifecycle: create, list, lookup, status change
///
/// Stateless between calls; the store owns the durable representation.
pub struct ReportService {
    store: Arc<dyn ReportStore>,
    notifier: Arc<NotificationService>,
    transitions: TransitionPolicy,
}

impl ReportService {
    pub fn new(
        store: Arc<dyn ReportStore>,
        notifier: Arc<NotificationService>,
        transitions: TransitionPolicy,
    ) -> Self {
        Self {
            store,
            notifier,
            transitions,
        }
    }

    /// Validates, persists, then best-effort alerts for high severity.
    /// Validation failures reject before anything is persisted.
    pub async fn create_report(
        &self,
        dto: CreateReportDto,
        photo_urls: Vec<String>,
    ) -> Result<Report> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if photo_urls.len() > MAX_PHOTOS_PER_REPORT {
            return Err(AppError::Validation(format!(
                "At most {} photos are allowed per report",
                MAX_PHOTOS_PER_REPORT
            )));
        }

        let report = self.store.insert(dto.into_new_report(photo_urls)).await?;

        // Alert dispatch is best-effort and must never fail the submission
        if let Err(e) = self.notifier.notify_if_needed(&report).await {
            tracing::warn!("Alert dispatch failed for report {}: {}", report.id, e);
        }

        Ok(report)
    }

    pub async fn list_reports(&self, filter: &ReportFilter) -> Result<Vec<Report>> {
        self.store.list(filter).await
    }

    pub async fn get_report(&self, id: Uuid) -> Result<Report> {
        self.store.get(id).await
    }

    /// Applies a status change after consulting the transition policy
    pub async fn set_status(&self, id: Uuid, status: ReportStatus) -> Result<Report> {
        let current = self.store.get(id).await?;

        if !self.transitions.allows(current.status, status) {
            return Err(AppError::Validation(format!(
                "Status transition {} -> {} is not allowed",
                current.status, status
            )));
        }

        self.store.update_status(id, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notifications::store::memory::MemoryNotificationStore;
    use crate::features::notifications::transport::MailTransport;
    use crate::features::reports::models::{DogCount, Severity};
    use crate::features::reports::store::memory::MemoryReportStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingMailer {
        sends: AtomicUsize,
    }

    #[async_trait]
    impl MailTransport for CountingMailer {
        async fn send(&self, _: &[String], _: &str, _: &str) -> Result<()> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Harness {
        service: ReportService,
        store: Arc<MemoryReportStore>,
        audit: Arc<MemoryNotificationStore>,
        mailer: Arc<CountingMailer>,
    }

    fn harness() -> Harness {
        harness_with_policy(TransitionPolicy::unrestricted())
    }

    fn harness_with_policy(policy: TransitionPolicy) -> Harness {
        let store = Arc::new(MemoryReportStore::new());
        let audit = Arc::new(MemoryNotificationStore::new());
        let mailer = Arc::new(CountingMailer::default());
        let notifier = Arc::new(NotificationService::new(
            audit.clone(),
            mailer.clone(),
            vec!["city@example.org".to_string()],
        ));
        let service = ReportService::new(store.clone(), notifier, policy);
        Harness {
            service,
            store,
            audit,
            mailer,
        }
    }

    fn valid_dto(severity: Severity) -> CreateReportDto {
        CreateReportDto {
            location: "MG Road".to_string(),
            severity,
            dog_count: DogCount::SixToTen,
            description: "pack blocking path".to_string(),
            contact_number: "+911234567890".to_string(),
            reported_by: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_timestamp_and_pending_status() {
        let h = harness();
        let report = h
            .service
            .create_report(valid_dto(Severity::Medium), vec![])
            .await
            .unwrap();

        assert_eq!(report.status, ReportStatus::Pending);
        assert!(!report.id.is_nil());
        assert_eq!(h.store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_with_empty_location_persists_nothing() {
        let h = harness();
        let mut dto = valid_dto(Severity::Low);
        dto.location = "".to_string();

        let err = h.service.create_report(dto, vec![]).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(h.store.count().await.unwrap(), 0);
        assert_eq!(h.mailer.sends.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_too_many_photos() {
        let h = harness();
        let photos: Vec<String> = (0..6).map(|i| format!("http://x/{i}.jpg")).collect();
        let err = h
            .service
            .create_report(valid_dto(Severity::Low), photos)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(h.store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_high_severity_triggers_exactly_one_notification() {
        let h = harness();
        let report = h
            .service
            .create_report(valid_dto(Severity::High), vec![])
            .await
            .unwrap();

        assert_eq!(h.mailer.sends.load(Ordering::SeqCst), 1);
        let audit = h.audit.all().await;
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].report_id, report.id);
    }

    #[tokio::test]
    async fn test_non_high_severity_triggers_no_notification() {
        let h = harness();
        h.service
            .create_report(valid_dto(Severity::Low), vec![])
            .await
            .unwrap();
        h.service
            .create_report(valid_dto(Severity::Medium), vec![])
            .await
            .unwrap();

        assert_eq!(h.mailer.sends.load(Ordering::SeqCst), 0);
        assert!(h.audit.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_set_status_changes_only_the_status_field() {
        let h = harness();
        let before = h
            .service
            .create_report(valid_dto(Severity::Low), vec!["http://x/1.jpg".to_string()])
            .await
            .unwrap();

        let after = h
            .service
            .set_status(before.id, ReportStatus::Resolved)
            .await
            .unwrap();

        assert_eq!(after.status, ReportStatus::Resolved);
        assert_eq!(
            Report {
                status: before.status,
                ..after.clone()
            },
            before
        );
    }

    #[tokio::test]
    async fn test_set_status_on_unknown_id_is_not_found() {
        let h = harness();
        h.service
            .create_report(valid_dto(Severity::Low), vec![])
            .await
            .unwrap();

        let err = h
            .service
            .set_status(Uuid::now_v7(), ReportStatus::Resolved)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // Store unchanged: still exactly one pending report
        let all = h.service.list_reports(&ReportFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, ReportStatus::Pending);
    }

    #[tokio::test]
    async fn test_list_returns_most_recent_first() {
        let h = harness();
        let mut ids = Vec::new();
        for loc in ["first", "second", "third"] {
            let mut dto = valid_dto(Severity::Low);
            dto.location = loc.to_string();
            ids.push(h.service.create_report(dto, vec![]).await.unwrap().id);
        }

        let listed = h.service.list_reports(&ReportFilter::default()).await.unwrap();
        let listed_ids: Vec<Uuid> = listed.iter().map(|r| r.id).collect();
        ids.reverse();
        assert_eq!(listed_ids, ids);
    }

    #[tokio::test]
    async fn test_list_filters_are_a_conjunction() {
        let h = harness();
        h.service
            .create_report(valid_dto(Severity::High), vec![])
            .await
            .unwrap();
        let mut dto = valid_dto(Severity::High);
        dto.location = "Station Road".to_string();
        h.service.create_report(dto, vec![]).await.unwrap();

        let filter = ReportFilter {
            status: Some(ReportStatus::Pending),
            severity: Some(Severity::High),
            text: Some("mg road".to_string()),
        };
        let matching = h.service.list_reports(&filter).await.unwrap();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].location, "MG Road");
    }

    #[tokio::test]
    async fn test_transition_policy_blocks_disallowed_change() {
        let h = harness_with_policy(
            TransitionPolicy::from_spec("pending>in-progress,in-progress>resolved").unwrap(),
        );
        let report = h
            .service
            .create_report(valid_dto(Severity::Low), vec![])
            .await
            .unwrap();

        let err = h
            .service
            .set_status(report.id, ReportStatus::Resolved)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Allowed path still works
        h.service
            .set_status(report.id, ReportStatus::InProgress)
            .await
            .unwrap();
        h.service
            .set_status(report.id, ReportStatus::Resolved)
            .await
            .unwrap();
    }
}
