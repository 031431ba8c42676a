use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Triage counters for the municipal dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_reports: i64,
    pub status_counts: StatusCountsDto,
    pub severity_counts: SeverityCountsDto,
    /// High-severity reports submitted in the last 7 days
    pub high_severity_this_week: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountsDto {
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub dismissed: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCountsDto {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
}
