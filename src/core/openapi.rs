use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::notifications::models as notification_models;
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::auth_handler::register,
        auth_handlers::auth_handler::login,
        // Reports
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::get_report,
        reports_handlers::report_handler::update_report_status,
        reports_handlers::report_handler::list_report_notifications,
        // Dashboard
        dashboard_handlers::dashboard_handler::get_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthResponseDto,
            // Reports
            reports_models::ReportStatus,
            reports_models::Severity,
            reports_models::DogCount,
            reports_dtos::CreateReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::UpdateReportStatusDto,
            // Notifications
            notification_models::Notification,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            dashboard_dtos::StatusCountsDto,
            dashboard_dtos::SeverityCountsDto,
        )
    ),
    tags(
        (name = "reports", description = "Citizen incident reports"),
        (name = "auth", description = "Admin authentication (external provider)"),
        (name = "dashboard", description = "Municipal triage dashboard")
    )
)]
pub struct ApiDoc;

/// Injects configurable title/version/description into the generated doc
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
