use crate::adb::{
    client::JobService,
    error::ClientError,
    requests::{HttpTransaction, NamedValue, PostData},
    responses::QueryResponse,
};
use std::sync::Arc;
use tracing::debug;

const FORM_MIME_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Issues front-end POST calls through the job service's generic
/// query-submission operation, scoped to one cluster.
pub struct QueryBroker {
    service: Arc<dyn JobService>,
    cluster_crn: String,
    frontend_url: String,
    dialect: String,
}

impl QueryBroker {
    pub fn new(
        service: Arc<dyn JobService>,
        cluster_crn: impl Into<String>,
        frontend_url: impl Into<String>,
        dialect: impl Into<String>,
    ) -> Self {
        QueryBroker {
            service,
            cluster_crn: cluster_crn.into(),
            frontend_url: frontend_url.into(),
            dialect: dialect.into(),
        }
    }

    /// POST `url_path` on the front end through the service, returning the
    /// service's response.
    pub async fn post(&self, url_path: &str) -> Result<QueryResponse, ClientError> {
        debug!(
            "Brokering front-end POST {url_path} via cluster {}",
            self.cluster_crn
        );
        let transaction = self.describe_post(url_path);
        self.service
            .submit_query(&self.cluster_crn, transaction)
            .await
    }

    /// HAR-style description of the POST the front end should execute.
    fn describe_post(&self, url_path: &str) -> HttpTransaction {
        let params = self.form_params();
        let text = params
            .iter()
            .map(|param| format!("{}={}", param.name, param.value))
            .collect::<Vec<_>>()
            .join("&");

        HttpTransaction {
            method: "POST".to_string(),
            url: format!("{}{}", self.frontend_url, url_path),
            http_version: "HTTP/1.1".to_string(),
            headers: vec![
                NamedValue::new("Accept-Encoding", "gzip, deflate, br"),
                NamedValue::new("Content-Type", FORM_MIME_TYPE),
                NamedValue::new("Accept", "*/*"),
                NamedValue::new("X-Requested-With", "XMLHttpRequest"),
                NamedValue::new("Connection", "keep-alive"),
            ],
            query_string: Vec::new(),
            post_data: PostData {
                mime_type: FORM_MIME_TYPE.to_string(),
                text,
                params,
            },
        }
    }

    /// Form parameters of the front-end call: the snippet descriptor and
    /// the quoted cluster CRN, both URL-encoded.
    fn form_params(&self) -> Vec<NamedValue> {
        let snippet =
            serde_json::json!({ "type": self.dialect, "source": "data" }).to_string();
        let cluster = format!("\"{}\"", self.cluster_crn);

        vec![
            NamedValue::new("snippet", urlencoding::encode(&snippet).into_owned()),
            NamedValue::new("cluster", urlencoding::encode(&cluster).into_owned()),
        ]
    }
}
