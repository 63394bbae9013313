use serde::Serialize;

/// Submission request for a SQL job, as the job service expects it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJobRequest {
    pub cluster_name: String,
    pub statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_xml: Option<String>,
}

impl SubmitJobRequest {
    pub fn builder(
        cluster_name: impl Into<String>,
        statement: impl Into<String>,
    ) -> SubmitJobRequestBuilder {
        SubmitJobRequestBuilder::new(cluster_name, statement)
    }
}

pub struct SubmitJobRequestBuilder {
    cluster_name: String,
    statement: String,
    params: Option<Vec<String>>,
    job_xml: Option<String>,
}

impl SubmitJobRequestBuilder {
    pub fn new(cluster_name: impl Into<String>, statement: impl Into<String>) -> Self {
        SubmitJobRequestBuilder {
            cluster_name: cluster_name.into(),
            statement: statement.into(),
            params: None,
            job_xml: None,
        }
    }

    pub fn params(mut self, params: Vec<String>) -> Self {
        self.params = Some(params);
        self
    }

    pub fn job_xml(mut self, job_xml: impl Into<String>) -> Self {
        self.job_xml = Some(job_xml.into());
        self
    }

    pub fn build(self) -> SubmitJobRequest {
        SubmitJobRequest {
            cluster_name: self.cluster_name,
            statement: self.statement,
            params: self.params,
            job_xml: self.job_xml,
        }
    }
}

/// List request, keyed by job ids.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsRequest {
    pub job_ids: Vec<String>,
}

/// Terminate request for a single job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminateJobRequest {
    pub job_id: String,
}

/// HAR-style description of an HTTP call, used by the generic
/// query-submission operation. The service replays it against the notebook
/// front end.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpTransaction {
    pub method: String,
    pub url: String,
    pub http_version: String,
    pub headers: Vec<NamedValue>,
    pub query_string: Vec<NamedValue>,
    pub post_data: PostData,
}

/// Name/value pair used for headers, query parameters and form fields.
#[derive(Debug, Clone, Serialize)]
pub struct NamedValue {
    pub name: String,
    pub value: String,
}

impl NamedValue {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        NamedValue {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Body of a described POST call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: String,
    pub text: String,
    pub params: Vec<NamedValue>,
}
