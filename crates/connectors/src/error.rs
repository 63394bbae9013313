use crate::{adb::error::ClientError, analytics::error::LogError, config::SettingsError};
use model::core::status::JobStatus;
use thiserror::Error;

/// Top-level errors surfaced by the notebook adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The service accepted the submission call but the job did not come
    /// back in a running state.
    #[error("Submission failure, job status was {status}")]
    SubmissionFailed { status: JobStatus },

    /// A previously submitted job ended in a failure state.
    #[error("Job was {status}")]
    JobFailed { status: JobStatus },

    /// The handle does not reference a submitted job.
    #[error("Job handle carries no job id")]
    MissingJobId,

    /// Job service error.
    #[error("Job service error: {0}")]
    Client(#[from] ClientError),

    /// Workload analytics service error.
    #[error("Log retrieval error: {0}")]
    Log(#[from] LogError),

    /// Settings loading or validation error.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}
