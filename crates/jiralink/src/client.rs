//! JIRA client facade and transport

use crate::auth::JiraAuth;
use crate::request::{self, Method, RequestDescriptor};
use crate::types::IssueResponse;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Executes a composed request as the application identity.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &RequestDescriptor) -> Result<TransportResponse>;
}

/// Status and body captured from an executed request.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    status: u16,
    body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decode the body as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// High-level operations on the JIRA Issue API.
///
/// Each call composes one request, executes it through the transport and
/// interprets the response. No state is carried between calls.
pub struct JiraClient<T: Transport> {
    transport: T,
}

impl<T: Transport> JiraClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the summary field of an issue.
    pub async fn fetch_issue_summary(&self, issue: &str) -> Result<String> {
        let descriptor = request::fetch_summary(issue)?;
        let response = self.transport.execute(&descriptor).await?;
        if !(200..300).contains(&response.status()) {
            return Err(Error::Upstream {
                status: response.status(),
            });
        }

        let parsed: IssueResponse = serde_json::from_value(response.json()?)
            .map_err(|_| Error::MalformedResponse("missing fields".to_string()))?;
        parsed
            .fields
            .summary
            .ok_or_else(|| Error::MalformedResponse("missing fields.summary".to_string()))
    }

    /// Append a single-paragraph comment to an issue.
    ///
    /// The upstream status is logged and returned rather than enforced;
    /// callers that need a success guarantee must check it.
    pub async fn write_comment(&self, issue: &str, comment: &str) -> Result<u16> {
        let descriptor = request::write_comment(issue, comment)?;
        let response = self.transport.execute(&descriptor).await?;
        tracing::debug!(
            status = response.status(),
            body = response.body(),
            "comment response"
        );
        Ok(response.status())
    }
}

/// `reqwest`-backed transport authenticated with HTTP Basic credentials.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    auth: JiraAuth,
}

impl HttpTransport {
    /// `base_url` is the site root, e.g. `https://example.atlassian.net`.
    pub fn new(base_url: impl Into<String>, auth: JiraAuth) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &RequestDescriptor) -> Result<TransportResponse> {
        let url = format!("{}{}", self.base_url, request.route);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .http
            .request(method, url)
            .headers(request.headers.clone())
            .header(reqwest::header::AUTHORIZATION, self.auth.basic_header());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse::new(status, body))
    }
}
