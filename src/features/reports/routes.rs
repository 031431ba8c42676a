use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::notifications::NotificationService;
use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;
use crate::modules::storage::PhotoStorage;

/// Create routes for the reports feature
///
/// All routes are public; the dashboard's admin gate lives in the client.
pub fn routes(
    report_service: Arc<ReportService>,
    notification_service: Arc<NotificationService>,
    photo_storage: Arc<dyn PhotoStorage>,
) -> Router {
    let state = ReportState {
        report_service,
        notification_service,
        photo_storage,
    };

    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route("/api/reports/{id}", get(handlers::get_report))
        .route("/api/reports/{id}/status", put(handlers::update_report_status))
        .route(
            "/api/reports/{id}/notifications",
            get(handlers::list_report_notifications),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use crate::features::notifications::store::memory::MemoryNotificationStore;
    use crate::features::notifications::transport::MailTransport;
    use crate::features::reports::services::TransitionPolicy;
    use crate::features::reports::store::memory::MemoryReportStore;
    use crate::modules::storage::FakePhotoStorage;
    use async_trait::async_trait;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::Value;

    struct NoopMailer;

    #[async_trait]
    impl MailTransport for NoopMailer {
        async fn send(&self, _: &[String], _: &str, _: &str) -> Result<()> {
            Ok(())
        }
    }

    fn test_server() -> TestServer {
        let report_store = Arc::new(MemoryReportStore::new());
        let notification_store = Arc::new(MemoryNotificationStore::new());
        let notifier = Arc::new(NotificationService::new(
            notification_store,
            Arc::new(NoopMailer),
            vec!["city@example.org".to_string()],
        ));
        let report_service = Arc::new(ReportService::new(
            report_store,
            Arc::clone(&notifier),
            TransitionPolicy::unrestricted(),
        ));
        let app = routes(report_service, notifier, Arc::new(FakePhotoStorage::default()));
        TestServer::new(app).unwrap()
    }

    fn report_form(location: &str, severity: &str) -> MultipartForm {
        MultipartForm::new()
            .add_text("location", location.to_string())
            .add_text("description", "pack blocking path")
            .add_text("severity", severity.to_string())
            .add_text("dogCount", "6-10")
            .add_text("contactNumber", "+911234567890")
    }

    #[tokio::test]
    async fn test_submit_high_severity_report_creates_audit_entry() {
        let server = test_server();

        let response = server
            .post("/api/reports")
            .multipart(report_form("MG Road", "high"))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let report = &body["data"];
        assert_eq!(report["status"], "pending");
        assert_eq!(report["location"], "MG Road");
        assert_eq!(report["dogCount"], "6-10");
        assert!(report["id"].is_string());
        assert!(report["timestamp"].is_string());

        let id = report["id"].as_str().unwrap();
        let audit: Value = server
            .get(&format!("/api/reports/{}/notifications", id))
            .await
            .json();
        let entries = audit["data"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["reportId"], *id);
    }

    #[tokio::test]
    async fn test_submit_with_photos_stores_urls() {
        let server = test_server();

        let form = report_form("Station Road", "low").add_part(
            "photos",
            Part::bytes(vec![0xFF, 0xD8, 0xFF])
                .file_name("dog.jpg")
                .mime_type("image/jpeg"),
        );

        let response = server.post("/api/reports").multipart(form).await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = response.json();
        let photos = body["data"]["photos"].as_array().unwrap();
        assert_eq!(photos.len(), 1);
        assert!(photos[0].as_str().unwrap().ends_with("dog.jpg"));
    }

    #[tokio::test]
    async fn test_submit_with_missing_severity_is_rejected() {
        let server = test_server();

        let form = MultipartForm::new()
            .add_text("location", "MG Road")
            .add_text("description", "pack blocking path")
            .add_text("dogCount", "1-2")
            .add_text("contactNumber", "+911234567890");

        let response = server.post("/api/reports").multipart(form).await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);

        let listed: Value = server.get("/api/reports").await.json();
        assert_eq!(listed["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_submit_with_out_of_enum_severity_is_rejected() {
        let server = test_server();

        let response = server
            .post("/api/reports")
            .multipart(report_form("MG Road", "catastrophic"))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_returns_most_recent_first() {
        let server = test_server();

        for loc in ["first", "second", "third"] {
            server
                .post("/api/reports")
                .multipart(report_form(loc, "low"))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        let body: Value = server.get("/api/reports").await.json();
        let locations: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["location"].as_str().unwrap())
            .collect();
        assert_eq!(locations, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let server = test_server();

        server
            .post("/api/reports")
            .multipart(report_form("MG Road", "high"))
            .await;
        server
            .post("/api/reports")
            .multipart(report_form("Station Road", "low"))
            .await;

        let body: Value = server
            .get("/api/reports")
            .add_query_param("severity", "high")
            .add_query_param("q", "mg")
            .await
            .json();
        let reports = body["data"].as_array().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["location"], "MG Road");
    }

    #[tokio::test]
    async fn test_get_unknown_report_is_404() {
        let server = test_server();
        let response = server
            .get(&format!("/api/reports/{}", uuid::Uuid::now_v7()))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_status_update_round_trip() {
        let server = test_server();

        let created: Value = server
            .post("/api/reports")
            .multipart(report_form("MG Road", "medium"))
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let response = server
            .put(&format!("/api/reports/{}/status", id))
            .json(&serde_json::json!({"status": "in-progress"}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "in-progress");
    }

    #[tokio::test]
    async fn test_bogus_status_is_rejected_and_record_unchanged() {
        let server = test_server();

        let created: Value = server
            .post("/api/reports")
            .multipart(report_form("MG Road", "medium"))
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let response = server
            .put(&format!("/api/reports/{}/status", id))
            .json(&serde_json::json!({"status": "bogus"}))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);

        let body: Value = server.get(&format!("/api/reports/{}", id)).await.json();
        assert_eq!(body["data"]["status"], "pending");
    }

    #[tokio::test]
    async fn test_status_update_on_unknown_id_is_404() {
        let server = test_server();
        let response = server
            .put(&format!("/api/reports/{}/status", uuid::Uuid::now_v7()))
            .json(&serde_json::json!({"status": "resolved"}))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }
}
