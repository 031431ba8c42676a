use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::notifications::models::Notification;
use crate::features::notifications::NotificationService;
use crate::features::reports::dtos::{
    CreateReportDto, ReportFilterQuery, ReportResponseDto, UpdateReportStatusDto,
};
use crate::features::reports::models::{DogCount, ReportFilter, Severity};
use crate::features::reports::services::ReportService;
use crate::modules::storage::PhotoStorage;
use crate::shared::constants::MAX_PHOTOS_PER_REPORT;
use crate::shared::types::{ApiResponse, Meta};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub notification_service: Arc<NotificationService>,
    pub photo_storage: Arc<dyn PhotoStorage>,
}

/// Submit a new incident report
///
/// Accepts multipart/form-data with:
/// - `location`, `description`, `severity`, `dogCount`, `contactNumber` (required)
/// - `reportedBy` (optional)
/// - `photos`: 0..5 image attachments
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body(
        content = CreateReportDto,
        content_type = "multipart/form-data",
        description = "Citizen report form fields plus photo attachments",
    ),
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Missing or invalid field")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(state): State<ReportState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    let mut location: Option<String> = None;
    let mut description: Option<String> = None;
    let mut severity: Option<Severity> = None;
    let mut dog_count: Option<DogCount> = None;
    let mut contact_number: Option<String> = None;
    let mut reported_by: Option<String> = None;
    let mut photos: Vec<(String, String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "location" => location = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "severity" => severity = Some(read_text(field).await?.parse()?),
            "dogCount" => dog_count = Some(read_text(field).await?.parse()?),
            "contactNumber" => contact_number = Some(read_text(field).await?),
            "reportedBy" => reported_by = Some(read_text(field).await?),
            "photos" => {
                if photos.len() >= MAX_PHOTOS_PER_REPORT {
                    return Err(AppError::Validation(format!(
                        "At most {} photos are allowed per report",
                        MAX_PHOTOS_PER_REPORT
                    )));
                }

                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "photo".to_string());
                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read photo bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read photo data: {}", e))
                })?;

                photos.push((filename, content_type, data.to_vec()));
            }
            other => {
                return Err(AppError::Validation(format!(
                    "Unknown form field '{}'",
                    other
                )));
            }
        }
    }

    let dto = CreateReportDto {
        location: location.unwrap_or_default(),
        severity: severity
            .ok_or_else(|| AppError::Validation("severity is required".to_string()))?,
        dog_count: dog_count
            .ok_or_else(|| AppError::Validation("dogCount is required".to_string()))?,
        description: description.unwrap_or_default(),
        contact_number: contact_number.unwrap_or_default(),
        reported_by: reported_by.filter(|s| !s.trim().is_empty()),
    };

    // Reject before any photo hits object storage
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut photo_urls = Vec::with_capacity(photos.len());
    for (filename, content_type, data) in photos {
        let url = state
            .photo_storage
            .store_photo(&filename, &content_type, data)
            .await?;
        photo_urls.push(url);
    }

    let report = state.report_service.create_report(dto, photo_urls).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some("Report submitted".to_string()),
            None,
        )),
    ))
}

/// List reports, most recent first
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportFilterQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<ReportResponseDto>>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
    Query(query): Query<ReportFilterQuery>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let filter: ReportFilter = query.into();
    let reports = state.report_service.list_reports(&filter).await?;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(state): State<ReportState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = state.report_service.get_report(id).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Update report status
#[utoipa::path(
    put,
    path = "/api/reports/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Invalid status or disallowed transition"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(state): State<ReportState>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = state.report_service.set_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// List alert audit entries for a report
#[utoipa::path(
    get,
    path = "/api/reports/{id}/notifications",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Audit entries", body = ApiResponse<Vec<Notification>>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn list_report_notifications(
    State(state): State<ReportState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Notification>>>> {
    // 404 for unknown report rather than an empty list
    state.report_service.get_report(id).await?;
    let notifications = state.notification_service.list_for_report(id).await?;
    Ok(Json(ApiResponse::success(Some(notifications), None, None)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read form field: {}", e)))
}
