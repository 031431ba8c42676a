use std::collections::HashSet;

use crate::features::reports::models::ReportStatus;

/// Configurable allow-list for status transitions
///
/// The default is unrestricted: any status may replace any other, including
/// reopening resolved or dismissed reports. Municipalities that want a
/// stricter workflow can set STATUS_TRANSITIONS, e.g.
/// "pending>in-progress,in-progress>resolved,in-progress>dismissed".
#[derive(Debug, Clone, Default)]
pub struct TransitionPolicy {
    allowed: Option<HashSet<(ReportStatus, ReportStatus)>>,
}

impl TransitionPolicy {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Parses "from>to" pairs from a comma-separated list.
    /// Unknown status names are a configuration error.
    pub fn from_spec(spec: &str) -> Result<Self, String> {
        let mut allowed = HashSet::new();
        for pair in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (from, to) = pair
                .split_once('>')
                .ok_or_else(|| format!("Invalid transition '{}': expected 'from>to'", pair))?;
            let from = from
                .trim()
                .parse::<ReportStatus>()
                .map_err(|e| e.to_string())?;
            let to = to.trim().parse::<ReportStatus>().map_err(|e| e.to_string())?;
            allowed.insert((from, to));
        }
        Ok(Self {
            allowed: Some(allowed),
        })
    }

    pub fn from_config(spec: Option<&str>) -> Result<Self, String> {
        match spec {
            Some(s) if !s.trim().is_empty() => Self::from_spec(s),
            _ => Ok(Self::unrestricted()),
        }
    }

    pub fn allows(&self, from: ReportStatus, to: ReportStatus) -> bool {
        match &self.allowed {
            None => true,
            // A no-op "transition" is always fine
            Some(set) => from == to || set.contains(&(from, to)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_allows_reopening() {
        let policy = TransitionPolicy::unrestricted();
        assert!(policy.allows(ReportStatus::Resolved, ReportStatus::Pending));
        assert!(policy.allows(ReportStatus::Dismissed, ReportStatus::InProgress));
    }

    #[test]
    fn test_allow_list_restricts_transitions() {
        let policy =
            TransitionPolicy::from_spec("pending>in-progress,in-progress>resolved").unwrap();
        assert!(policy.allows(ReportStatus::Pending, ReportStatus::InProgress));
        assert!(policy.allows(ReportStatus::InProgress, ReportStatus::Resolved));
        assert!(!policy.allows(ReportStatus::Resolved, ReportStatus::Pending));
        assert!(!policy.allows(ReportStatus::Pending, ReportStatus::Resolved));
    }

    #[test]
    fn test_same_status_is_always_allowed() {
        let policy = TransitionPolicy::from_spec("pending>in-progress").unwrap();
        assert!(policy.allows(ReportStatus::Resolved, ReportStatus::Resolved));
    }

    #[test]
    fn test_invalid_spec_is_rejected() {
        assert!(TransitionPolicy::from_spec("pending->resolved").is_err());
        assert!(TransitionPolicy::from_spec("pending>bogus").is_err());
    }

    #[test]
    fn test_empty_config_means_unrestricted() {
        let policy = TransitionPolicy::from_config(None).unwrap();
        assert!(policy.allows(ReportStatus::Dismissed, ReportStatus::Pending));
    }
}
