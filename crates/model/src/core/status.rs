use serde::{Deserialize, Serialize};
use std::fmt;

/// Status values the job service reports while a job is still in progress.
pub const RUNNING_STATES: [&str; 3] = ["QUEUED", "RUNNING", "SUBMITTING"];

/// Status values the job service reports for jobs that ended without
/// completing. The service reports these in lower case, unlike the running
/// set; values are matched exactly as received.
pub const FAILURE_STATES: [&str; 2] = ["failed", "terminated"];

/// Raw job status string as reported by the job service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobStatus(String);

impl JobStatus {
    pub fn new(status: impl Into<String>) -> Self {
        JobStatus(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the job is still in progress.
    pub fn is_running(&self) -> bool {
        RUNNING_STATES.contains(&self.0.as_str())
    }

    /// Whether the job ended without completing.
    pub fn is_failure(&self) -> bool {
        FAILURE_STATES.contains(&self.0.as_str())
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobStatus {
    fn from(status: &str) -> Self {
        JobStatus(status.to_string())
    }
}

/// Job state as surfaced to the notebook front end.
///
/// Anything neither running nor failed is reported as available; failure
/// states never map here, they surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryState {
    Running,
    Available,
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryState::Running => write!(f, "running"),
            QueryState::Available => write!(f, "available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_set_membership() {
        for status in RUNNING_STATES {
            assert!(JobStatus::new(status).is_running());
            assert!(!JobStatus::new(status).is_failure());
        }
    }

    #[test]
    fn failure_set_membership() {
        for status in FAILURE_STATES {
            assert!(JobStatus::new(status).is_failure());
            assert!(!JobStatus::new(status).is_running());
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        // The service reports running states upper case and failure states
        // lower case; other casings belong to neither set.
        assert!(!JobStatus::new("queued").is_running());
        assert!(!JobStatus::new("FAILED").is_failure());
    }

    #[test]
    fn status_serializes_transparently() {
        let status = JobStatus::new("SUBMITTING");
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            serde_json::json!("SUBMITTING")
        );
    }

    #[test]
    fn query_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(QueryState::Running).unwrap(),
            serde_json::json!("running")
        );
        assert_eq!(QueryState::Available.to_string(), "available");
    }
}
