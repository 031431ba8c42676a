pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::{ReportService, TransitionPolicy};
pub use store::{PgReportStore, ReportStore};
