pub mod report_handler;

pub use report_handler::{
    create_report, get_report, list_report_notifications, list_reports, update_report_status,
    ReportState,
};
