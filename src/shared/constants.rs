/// Maximum number of photo attachments accepted per report
pub const MAX_PHOTOS_PER_REPORT: usize = 5;

/// Subject line for high-severity alert mail
pub const ALERT_SUBJECT: &str = "High Severity Dog Incident Reported";
