//! In-memory report store used by service and handler tests.
//! Mirrors the ordering and not-found semantics of the Postgres store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report, ReportFilter, ReportStatus};
use crate::features::reports::store::ReportStore;

#[derive(Default)]
pub struct MemoryReportStore {
    reports: RwLock<Vec<Report>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(report: &Report, filter: &ReportFilter) -> bool {
    if let Some(status) = filter.status {
        if report.status != status {
            return false;
        }
    }
    if let Some(severity) = filter.severity {
        if report.severity != severity {
            return false;
        }
    }
    if let Some(ref text) = filter.text {
        let needle = text.to_lowercase();
        let in_location = report.location.to_lowercase().contains(&needle);
        let in_id = report.id.to_string().contains(&needle);
        if !in_location && !in_id {
            return false;
        }
    }
    true
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn insert(&self, data: NewReport) -> Result<Report> {
        let report = Report {
            id: Uuid::now_v7(),
            location: data.location,
            severity: data.severity,
            status: ReportStatus::Pending,
            dog_count: data.dog_count,
            description: data.description,
            contact_number: data.contact_number,
            photos: data.photos,
            reported_by: data.reported_by,
            created_at: Utc::now(),
        };
        self.reports.write().await.push(report.clone());
        Ok(report)
    }

    async fn get(&self, id: Uuid) -> Result<Report> {
        self.reports
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>> {
        let mut reports: Vec<Report> = self
            .reports
            .read()
            .await
            .iter()
            .filter(|r| matches(r, filter))
            .cloned()
            .collect();
        // created_at DESC with id as a tiebreaker, same as the SQL ordering
        reports.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(reports)
    }

    async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<Report> {
        let mut reports = self.reports.write().await;
        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;
        report.status = status;
        Ok(report.clone())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.reports.read().await.len() as i64)
    }
}
