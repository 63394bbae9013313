use crate::{analytics::error::LogError, config::ConnectorSettings};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const TASK_ATTEMPT_LOG_PATH: &str = "/api/v1/logs/taskAttempt";

/// Log blob of a single task attempt.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskAttemptLog {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
}

/// Log-retrieval operations exposed by the workload analytics service.
#[async_trait]
pub trait TaskLogService: Send + Sync {
    /// Fetch the log blob for a task attempt of an operation execution.
    /// `attempt_id` of `None` resolves to the latest attempt.
    async fn task_attempt_log(
        &self,
        execution_id: &str,
        attempt_id: Option<&str>,
    ) -> Result<TaskAttemptLog, LogError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskAttemptLogRequest<'a> {
    operation_execution_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attempt_id: Option<&'a str>,
}

/// HTTP client for the workload analytics service.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl AnalyticsClient {
    pub fn new(settings: &ConnectorSettings) -> Result<Self, LogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(AnalyticsClient {
            http,
            base_url: settings.analytics_url.clone(),
            access_token: settings.access_token.clone(),
        })
    }
}

#[async_trait]
impl TaskLogService for AnalyticsClient {
    async fn task_attempt_log(
        &self,
        execution_id: &str,
        attempt_id: Option<&str>,
    ) -> Result<TaskAttemptLog, LogError> {
        let url = format!("{}{}", self.base_url, TASK_ATTEMPT_LOG_PATH);
        debug!("POST {url} for execution {execution_id}");

        let request = TaskAttemptLogRequest {
            operation_execution_id: execution_id,
            attempt_id,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LogError::from_response(status.as_u16(), &body));
        }

        Ok(response.json::<TaskAttemptLog>().await?)
    }
}
