use model::core::status::JobStatus;
use serde::Deserialize;

/// One job entry in a submit or list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub job_id: String,
    pub crn: String,
    pub status: JobStatus,
}

/// Response shape shared by the submit and list operations.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobEntry>,
}

impl JobsResponse {
    /// First entry of the response, taking ownership. Submissions and
    /// id-scoped lists carry exactly one entry.
    pub fn into_first_job(self) -> Option<JobEntry> {
        self.jobs.into_iter().next()
    }
}

/// Response of the generic query-submission operation.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub payload: serde_json::Value,
}
