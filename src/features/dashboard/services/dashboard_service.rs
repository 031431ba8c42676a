use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::core::error::Result;
use crate::features::dashboard::dtos::{
    DashboardSummaryDto, SeverityCountsDto, StatusCountsDto,
};
use crate::features::reports::models::{Report, ReportFilter, ReportStatus, Severity};
use crate::features::reports::store::ReportStore;

/// Service for municipal dashboard aggregations
pub struct DashboardService {
    store: Arc<dyn ReportStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let reports = self.store.list(&ReportFilter::default()).await?;
        Ok(summarize(&reports, Utc::now()))
    }
}

/// Aggregates triage counters from a report listing
pub fn summarize(reports: &[Report], now: DateTime<Utc>) -> DashboardSummaryDto {
    let week_ago = now - Duration::days(7);

    let mut status_counts = StatusCountsDto::default();
    let mut severity_counts = SeverityCountsDto::default();
    let mut high_severity_this_week = 0;

    for report in reports {
        match report.status {
            ReportStatus::Pending => status_counts.pending += 1,
            ReportStatus::InProgress => status_counts.in_progress += 1,
            ReportStatus::Resolved => status_counts.resolved += 1,
            ReportStatus::Dismissed => status_counts.dismissed += 1,
        }
        match report.severity {
            Severity::Low => severity_counts.low += 1,
            Severity::Medium => severity_counts.medium += 1,
            Severity::High => severity_counts.high += 1,
        }
        if report.severity == Severity::High && report.created_at >= week_ago {
            high_severity_this_week += 1;
        }
    }

    DashboardSummaryDto {
        total_reports: reports.len() as i64,
        status_counts,
        severity_counts,
        high_severity_this_week,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::DogCount;
    use uuid::Uuid;

    fn report(
        severity: Severity,
        status: ReportStatus,
        created_at: DateTime<Utc>,
    ) -> Report {
        Report {
            id: Uuid::now_v7(),
            location: "MG Road".to_string(),
            severity,
            status,
            dog_count: DogCount::OneToTwo,
            description: "stray pack".to_string(),
            contact_number: "+911234567890".to_string(),
            photos: vec![],
            reported_by: None,
            created_at,
        }
    }

    #[test]
    fn test_summarize_empty_listing() {
        let summary = summarize(&[], Utc::now());
        assert_eq!(summary.total_reports, 0);
        assert_eq!(summary.status_counts, StatusCountsDto::default());
        assert_eq!(summary.high_severity_this_week, 0);
    }

    #[test]
    fn test_summarize_counts_by_status_and_severity() {
        let now = Utc::now();
        let reports = vec![
            report(Severity::High, ReportStatus::Pending, now),
            report(Severity::High, ReportStatus::Resolved, now - Duration::days(10)),
            report(Severity::Low, ReportStatus::InProgress, now),
            report(Severity::Medium, ReportStatus::Dismissed, now),
        ];

        let summary = summarize(&reports, now);
        assert_eq!(summary.total_reports, 4);
        assert_eq!(summary.status_counts.pending, 1);
        assert_eq!(summary.status_counts.in_progress, 1);
        assert_eq!(summary.status_counts.resolved, 1);
        assert_eq!(summary.status_counts.dismissed, 1);
        assert_eq!(summary.severity_counts.high, 2);
        assert_eq!(summary.severity_counts.low, 1);
        assert_eq!(summary.severity_counts.medium, 1);
        // The resolved high-severity report is older than a week
        assert_eq!(summary.high_severity_this_week, 1);
    }
}
