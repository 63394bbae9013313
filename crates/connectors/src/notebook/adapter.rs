use crate::{
    adb::{
        client::{AdbClient, JobService},
        error::ClientError,
        requests::SubmitJobRequest,
    },
    analytics::client::{AnalyticsClient, TaskLogService},
    config::ConnectorSettings,
    error::AdapterError,
    notebook::{broker::QueryBroker, log, routes},
};
use model::{
    core::status::QueryState,
    execution::handle::JobHandle,
    records::{
        listing::{CancelOutcome, JobListing},
        result::ResultSet,
    },
};
use std::sync::Arc;
use tracing::{info, warn};

/// Reported while a job is in flight; the service exposes no progress
/// signal.
const PROGRESS_MIDPOINT: u8 = 50;

/// Dialect advertised in brokered front-end calls.
const DEFAULT_DIALECT: &str = "impala";

/// Notebook execution adapter for the analytic database service.
///
/// Translates the front end's execution operations into job service calls
/// and reshapes the responses. One adapter serves one user and one
/// cluster; the front end owns polling cadence.
pub struct JobAdapter {
    user: String,
    cluster_name: String,
    jobs: Arc<dyn JobService>,
    logs: Arc<dyn TaskLogService>,
    broker: QueryBroker,
}

impl JobAdapter {
    /// Build an adapter with HTTP clients constructed from settings.
    pub fn connect(
        user: impl Into<String>,
        settings: &ConnectorSettings,
    ) -> Result<Self, AdapterError> {
        let jobs: Arc<dyn JobService> = Arc::new(AdbClient::new(settings)?);
        let logs: Arc<dyn TaskLogService> = Arc::new(AnalyticsClient::new(settings)?);
        Ok(Self::with_services(
            user,
            settings.cluster_name.clone(),
            settings.frontend_url.clone(),
            jobs,
            logs,
        ))
    }

    /// Build an adapter over existing service handles.
    pub fn with_services(
        user: impl Into<String>,
        cluster_name: impl Into<String>,
        frontend_url: impl Into<String>,
        jobs: Arc<dyn JobService>,
        logs: Arc<dyn TaskLogService>,
    ) -> Self {
        let cluster_name = cluster_name.into();
        let broker = QueryBroker::new(
            Arc::clone(&jobs),
            cluster_name.clone(),
            frontend_url.into(),
            DEFAULT_DIALECT,
        );

        JobAdapter {
            user: user.into(),
            cluster_name,
            jobs,
            logs,
            broker,
        }
    }

    /// Submit `statement` as a job on the configured cluster.
    pub async fn execute(&self, statement: &str) -> Result<JobHandle, AdapterError> {
        let request = SubmitJobRequest::builder(&self.cluster_name, statement).build();
        let response = self.jobs.submit_job(request).await?;
        let job = response.into_first_job().ok_or(ClientError::EmptyJobList)?;

        if !job.status.is_running() {
            return Err(AdapterError::SubmissionFailed { status: job.status });
        }

        info!(
            "User {} submitted job {} to cluster {}",
            self.user, job.job_id, self.cluster_name
        );
        Ok(JobHandle::submitted(job.job_id, job.crn))
    }

    /// Current state of a submitted job, projected for the front end.
    pub async fn check_status(&self, handle: &JobHandle) -> Result<QueryState, AdapterError> {
        let job_id = handle.job_id().ok_or(AdapterError::MissingJobId)?;
        let response = self.jobs.list_jobs(&[job_id.to_string()]).await?;
        let job = response.into_first_job().ok_or(ClientError::EmptyJobList)?;

        if job.status.is_running() {
            Ok(QueryState::Running)
        } else if job.status.is_failure() {
            Err(AdapterError::JobFailed { status: job.status })
        } else {
            Ok(QueryState::Available)
        }
    }

    /// The result payload is a fixed completion banner; the real output
    /// stays in the service and is not retrieved here.
    pub fn fetch_result(&self, _handle: &JobHandle) -> ResultSet {
        ResultSet::completed_placeholder()
    }

    /// Terminate the job behind `handle`. A handle that never carried a
    /// job id is reported as a soft failure without calling the service.
    pub async fn cancel(&self, handle: &JobHandle) -> Result<CancelOutcome, AdapterError> {
        match handle.job_id() {
            Some(job_id) => {
                self.jobs.terminate_job(job_id).await?;
                info!("User {} cancelled job {}", self.user, job_id);
                Ok(CancelOutcome::delivered())
            }
            None => {
                warn!("Cancel requested for a job that was never submitted");
                Ok(CancelOutcome::rejected(
                    "Could not cancel because the job was never submitted",
                ))
            }
        }
    }

    /// Command output extracted from the stdout of the job's latest task
    /// attempt.
    pub async fn get_log(&self, handle: &JobHandle) -> Result<String, AdapterError> {
        let job_id = handle.job_id().ok_or(AdapterError::MissingJobId)?;
        let attempt = self.logs.task_attempt_log(job_id, None).await?;
        Ok(log::extract_command_output(&attempt.stdout))
    }

    /// Fixed midpoint; there is no real progress tracking.
    pub fn progress(&self, _logs: &str) -> u8 {
        PROGRESS_MIDPOINT
    }

    /// Job browser entries for the front end. The job is reported as
    /// started and unfinished; completion is observed through
    /// `check_status`.
    pub fn get_jobs(&self, handle: &JobHandle) -> Result<Vec<JobListing>, AdapterError> {
        let job_id = handle.job_id().ok_or(AdapterError::MissingJobId)?;
        Ok(vec![JobListing {
            name: job_id.to_string(),
            url: routes::job_browser_link(job_id),
            started: true,
            finished: false,
        }])
    }

    /// Autocomplete lookup, brokered through the service back to the front
    /// end. Table, column and nested paths are accepted for contract
    /// compatibility but do not change the URL.
    pub async fn autocomplete(
        &self,
        database: Option<&str>,
        _table: Option<&str>,
        _column: Option<&str>,
        _nested: Option<&str>,
    ) -> Result<serde_json::Value, AdapterError> {
        let path = routes::autocomplete_path(database);
        let response = self.broker.post(&path).await?;
        Ok(response.payload)
    }
}
