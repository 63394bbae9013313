use crate::{
    adb::{
        error::ClientError,
        requests::{HttpTransaction, ListJobsRequest, SubmitJobRequest, TerminateJobRequest},
        responses::{JobsResponse, QueryResponse},
    },
    config::ConnectorSettings,
};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::debug;

const SUBMIT_JOB_PATH: &str = "/api/v1/jobs/submit";
const LIST_JOBS_PATH: &str = "/api/v1/jobs/list";
const TERMINATE_JOB_PATH: &str = "/api/v1/jobs/terminate";
const SUBMIT_QUERY_PATH: &str = "/api/v1/queries/submit";

/// Job-submission operations exposed by the analytic database service.
#[async_trait]
pub trait JobService: Send + Sync {
    /// Submit a SQL statement as a job on a cluster.
    async fn submit_job(&self, request: SubmitJobRequest) -> Result<JobsResponse, ClientError>;

    /// Look up jobs by id.
    async fn list_jobs(&self, job_ids: &[String]) -> Result<JobsResponse, ClientError>;

    /// Ask the service to terminate a job. No payload comes back.
    async fn terminate_job(&self, job_id: &str) -> Result<(), ClientError>;

    /// Forward an HTTP transaction description to the notebook front end
    /// through the service, scoped to a cluster.
    async fn submit_query(
        &self,
        cluster_crn: &str,
        transaction: HttpTransaction,
    ) -> Result<QueryResponse, ClientError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitQueryRequest<'a> {
    cluster_crn: &'a str,
    payload: HttpTransaction,
}

/// HTTP client for the job service.
#[derive(Debug, Clone)]
pub struct AdbClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl AdbClient {
    pub fn new(settings: &ConnectorSettings) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(AdbClient {
            http,
            base_url: settings.service_url.clone(),
            access_token: settings.access_token.clone(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(path, body).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json_discard<B>(&self, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + Sync,
    {
        self.send(path, body).await?;
        Ok(())
    }

    async fn send<B>(&self, path: &str, body: &B) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        Ok(response)
    }
}

#[async_trait]
impl JobService for AdbClient {
    async fn submit_job(&self, request: SubmitJobRequest) -> Result<JobsResponse, ClientError> {
        self.post_json(SUBMIT_JOB_PATH, &request).await
    }

    async fn list_jobs(&self, job_ids: &[String]) -> Result<JobsResponse, ClientError> {
        let request = ListJobsRequest {
            job_ids: job_ids.to_vec(),
        };
        self.post_json(LIST_JOBS_PATH, &request).await
    }

    async fn terminate_job(&self, job_id: &str) -> Result<(), ClientError> {
        let request = TerminateJobRequest {
            job_id: job_id.to_string(),
        };
        self.post_json_discard(TERMINATE_JOB_PATH, &request).await
    }

    async fn submit_query(
        &self,
        cluster_crn: &str,
        transaction: HttpTransaction,
    ) -> Result<QueryResponse, ClientError> {
        let request = SubmitQueryRequest {
            cluster_crn,
            payload: transaction,
        };
        self.post_json(SUBMIT_QUERY_PATH, &request).await
    }
}
