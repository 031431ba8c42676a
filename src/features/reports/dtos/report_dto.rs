use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{
    DogCount, NewReport, Report, ReportFilter, ReportStatus, Severity,
};
use crate::shared::validation::CONTACT_NUMBER_REGEX;

/// Input collected from the citizen report form (multipart fields,
/// photos handled separately)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    pub severity: Severity,

    pub dog_count: DogCount,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(regex(path = *CONTACT_NUMBER_REGEX, message = "contactNumber is not a valid phone number"))]
    pub contact_number: String,

    pub reported_by: Option<String>,
}

impl CreateReportDto {
    pub fn into_new_report(self, photos: Vec<String>) -> NewReport {
        NewReport {
            location: self.location,
            severity: self.severity,
            dog_count: self.dog_count,
            description: self.description,
            contact_number: self.contact_number,
            photos,
            reported_by: self.reported_by,
        }
    }
}

/// Response DTO for a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub location: String,
    pub severity: Severity,
    pub status: ReportStatus,
    pub dog_count: DogCount,
    pub description: String,
    pub contact_number: String,
    pub photos: Vec<String>,
    pub reported_by: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            location: r.location,
            severity: r.severity,
            status: r.status,
            dog_count: r.dog_count,
            description: r.description,
            contact_number: r.contact_number,
            photos: r.photos,
            reported_by: r.reported_by,
            timestamp: r.created_at,
        }
    }
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

/// Optional list filters, applied as a conjunction
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReportFilterQuery {
    /// Exact status match
    pub status: Option<ReportStatus>,
    /// Exact severity match
    pub severity: Option<Severity>,
    /// Substring match against location or report id
    pub q: Option<String>,
}

impl From<ReportFilterQuery> for ReportFilter {
    fn from(q: ReportFilterQuery) -> Self {
        ReportFilter {
            status: q.status,
            severity: q.severity,
            text: q.q.filter(|s| !s.trim().is_empty()),
        }
    }
}
