use serde::{Deserialize, Serialize};

/// Opaque handle returned by a successful submission and echoed back by the
/// front end on every subsequent call. Never mutated by the connector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle {
    /// Job identifier within the job service. Absent when the submission
    /// never succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Cloud resource name of the submitted job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(default)]
    pub has_result_set: bool,
}

impl JobHandle {
    /// Handle for a job the service accepted. Results stay in the external
    /// service, so the handle never advertises a result set.
    pub fn submitted(id: impl Into<String>, crn: impl Into<String>) -> Self {
        JobHandle {
            id: Some(id.into()),
            crn: Some(crn.into()),
            has_result_set: false,
        }
    }

    pub fn job_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_handle_carries_no_result_set() {
        let handle = JobHandle::submitted("job-1", "crn:adb:job-1");
        assert_eq!(handle.job_id(), Some("job-1"));
        assert_eq!(handle.crn.as_deref(), Some("crn:adb:job-1"));
        assert!(!handle.has_result_set);
    }

    #[test]
    fn empty_handle_deserializes_without_id() {
        let handle: JobHandle = serde_json::from_str("{}").unwrap();
        assert_eq!(handle.job_id(), None);
        assert_eq!(handle.crn, None);
        assert!(!handle.has_result_set);
    }

    #[test]
    fn handle_roundtrips() {
        let handle = JobHandle::submitted("job-2", "crn:adb:job-2");
        let json = serde_json::to_string(&handle).unwrap();
        let back: JobHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(handle, back);
    }
}
