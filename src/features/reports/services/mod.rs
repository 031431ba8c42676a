mod report_service;
mod transition_policy;

pub use report_service::ReportService;
pub use transition_policy::TransitionPolicy;
