use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report, ReportFilter, ReportStatus};
use crate::features::reports::store::ReportStore;

const REPORT_COLUMNS: &str = "id, location, severity, status, dog_count, \
     description, contact_number, photos, reported_by, created_at";

/// Postgres-backed report store
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert(&self, data: NewReport) -> Result<Report> {
        // UUID v7 keeps id order aligned with insertion order
        let id = Uuid::now_v7();

        let report = sqlx::query_as::<_, Report>(&format!(
            "INSERT INTO reports \
                 (id, location, severity, status, dog_count, description, contact_number, photos, reported_by) \
             VALUES ($1, $2, $3, 'pending', $4, $5, $6, $7, $8) \
             RETURNING {REPORT_COLUMNS}"
        ))
        .bind(id)
        .bind(&data.location)
        .bind(data.severity)
        .bind(data.dog_count)
        .bind(&data.description)
        .bind(&data.contact_number)
        .bind(&data.photos)
        .bind(&data.reported_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Created report {} at {}", report.id, report.location);

        Ok(report)
    }

    async fn get(&self, id: Uuid) -> Result<Report> {
        sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get report: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {REPORT_COLUMNS} FROM reports"));

        if !filter.is_empty() {
            qb.push(" WHERE TRUE");
            if let Some(status) = filter.status {
                qb.push(" AND status = ").push_bind(status);
            }
            if let Some(severity) = filter.severity {
                qb.push(" AND severity = ").push_bind(severity);
            }
            if let Some(ref text) = filter.text {
                let pattern = format!("%{}%", text);
                qb.push(" AND (location ILIKE ")
                    .push_bind(pattern.clone())
                    .push(" OR id::text ILIKE ")
                    .push_bind(pattern)
                    .push(")");
            }
        }

        qb.push(" ORDER BY created_at DESC, id DESC");

        let reports = qb
            .build_query_as::<Report>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(reports)
    }

    async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(&format!(
            "UPDATE reports SET status = $2 WHERE id = $1 RETURNING {REPORT_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update report status: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        tracing::info!("Report {} status set to {}", id, status);

        Ok(report)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count reports: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(count)
    }
}
