use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::AppError;

/// Report status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Dismissed,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::InProgress => write!(f, "in-progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
            ReportStatus::Dismissed => write!(f, "dismissed"),
        }
    }
}

impl FromStr for ReportStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReportStatus::Pending),
            "in-progress" => Ok(ReportStatus::InProgress),
            "resolved" => Ok(ReportStatus::Resolved),
            "dismissed" => Ok(ReportStatus::Dismissed),
            other => Err(AppError::Validation(format!(
                "Invalid status '{}': expected one of pending, in-progress, resolved, dismissed",
                other
            ))),
        }
    }
}

/// Report severity enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_severity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl FromStr for Severity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(AppError::Validation(format!(
                "Invalid severity '{}': expected one of low, medium, high",
                other
            ))),
        }
    }
}

/// Categorical bucket for how many dogs were sighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "dog_count")]
pub enum DogCount {
    #[sqlx(rename = "1-2")]
    #[serde(rename = "1-2")]
    OneToTwo,
    #[sqlx(rename = "3-5")]
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[sqlx(rename = "6-10")]
    #[serde(rename = "6-10")]
    SixToTen,
    #[sqlx(rename = "10+")]
    #[serde(rename = "10+")]
    TenPlus,
}

impl std::fmt::Display for DogCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DogCount::OneToTwo => write!(f, "1-2"),
            DogCount::ThreeToFive => write!(f, "3-5"),
            DogCount::SixToTen => write!(f, "6-10"),
            DogCount::TenPlus => write!(f, "10+"),
        }
    }
}

impl FromStr for DogCount {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-2" => Ok(DogCount::OneToTwo),
            "3-5" => Ok(DogCount::ThreeToFive),
            "6-10" => Ok(DogCount::SixToTen),
            "10+" => Ok(DogCount::TenPlus),
            other => Err(AppError::Validation(format!(
                "Invalid dogCount '{}': expected one of 1-2, 3-5, 6-10, 10+",
                other
            ))),
        }
    }
}

/// Database model for a citizen incident report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub location: String,
    pub severity: Severity,
    pub status: ReportStatus,
    pub dog_count: DogCount,
    pub description: String,
    pub contact_number: String,
    pub photos: Vec<String>,
    pub reported_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new report
///
/// id, status and created_at are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub location: String,
    pub severity: Severity,
    pub dog_count: DogCount,
    pub description: String,
    pub contact_number: String,
    pub photos: Vec<String>,
    pub reported_by: Option<String>,
}

/// Conjunction of optional list predicates
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub status: Option<ReportStatus>,
    pub severity: Option<Severity>,
    /// Case-insensitive substring match against location or id
    pub text: Option<String>,
}

impl ReportFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.severity.is_none() && self.text.is_none()
    }
}
