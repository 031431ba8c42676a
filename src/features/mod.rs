pub mod auth;
pub mod dashboard;
pub mod notifications;
pub mod reports;
