mod pg;

#[cfg(test)]
pub mod memory;

pub use pg::PgReportStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::reports::models::{NewReport, Report, ReportFilter, ReportStatus};

/// Durable collection of report records
///
/// The store assigns ids and creation timestamps; callers never supply them.
/// Records are returned most recent first.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert(&self, data: NewReport) -> Result<Report>;

    async fn get(&self, id: Uuid) -> Result<Report>;

    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>>;

    /// Overwrites the status field only. Any status may replace any other;
    /// transition rules live in the service layer.
    async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<Report>;

    async fn count(&self) -> Result<i64>;
}
