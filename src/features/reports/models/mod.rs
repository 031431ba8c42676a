mod report;

pub use report::{DogCount, NewReport, Report, ReportFilter, ReportStatus, Severity};
