// src/api/recorder.rs
//! Client for the notebook recording service.
//!
//! The service speaks multipart form uploads on both of its endpoints:
//! one receives notebook content and answers with an identifier, the
//! other looks a repository path up and answers with a verdict payload.

use crate::constants::{
    FIELD_FILE_PATH, FIELD_INPUT_TYPE, FIELD_OWNER, FIELD_REPO, FIELD_STDIN, NOTEBOOK_INPUT_TYPE,
};
use crate::error::AppError;
use crate::links::repo_file_path;
use crate::types::{IssuedIdentifier, NotebookPath, NotebookSnapshot, ServiceEndpoint};
use reqwest::multipart::Form;
use reqwest::{header, Client, StatusCode};

use super::client::{body_preview, extract_response_text};
use super::responses::LookupPayload;

/// A thin wrapper around reqwest Client for recording service requests.
#[derive(Clone)]
pub struct RecorderClient {
    client: Client,
    record_endpoint: ServiceEndpoint,
    lookup_endpoint: ServiceEndpoint,
}

impl RecorderClient {
    /// Creates a new HTTP client for the recording service.
    ///
    /// A session cookie, when configured, rides along on every request
    /// the same way a browser session would.
    pub fn new(
        record_endpoint: ServiceEndpoint,
        lookup_endpoint: ServiceEndpoint,
        cookie: Option<&str>,
    ) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        if let Some(cookie) = cookie {
            let mut value = header::HeaderValue::from_str(cookie).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid session cookie: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(header::COOKIE, value);
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            record_endpoint,
            lookup_endpoint,
        })
    }

    /// Asks the service whether the repository already holds a file.
    ///
    /// The service performs the repository lookup on our behalf and
    /// reports through the payload's return code. The verdict only
    /// counts on a literal 200; any other status is a service failure
    /// even when the body happens to parse.
    pub async fn lookup(
        &self,
        owner: &str,
        repo: &str,
        repo_path: &str,
    ) -> Result<LookupPayload, AppError> {
        let form = Form::new()
            .text(FIELD_OWNER, owner.to_string())
            .text(FIELD_REPO, repo.to_string())
            .text(FIELD_FILE_PATH, repo_path.to_string());

        log::debug!(
            "POST {} (lookup {} in {}/{})",
            self.lookup_endpoint, repo_path, owner, repo
        );
        let response = self
            .client
            .post(self.lookup_endpoint.as_str())
            .multipart(form)
            .send()
            .await?;
        let result = extract_response_text(response).await?;

        if result.status != StatusCode::OK {
            return Err(AppError::RecorderService {
                status: result.status,
                body_preview: body_preview(&result.data),
            });
        }

        serde_json::from_str(&result.data).map_err(|e| {
            AppError::MalformedResponse(format!(
                "Lookup answer from {} is not a verdict payload: {} (body: {})",
                result.url,
                e,
                body_preview(&result.data)
            ))
        })
    }
}

#[async_trait::async_trait]
impl super::LinkRecorder for RecorderClient {
    /// Uploads a notebook snapshot and returns the identifier the
    /// service assigned to it.
    ///
    /// Only a literal 200 counts as success; 201, 204 or any other
    /// status is a service failure. The body is taken verbatim as the
    /// identifier, whitespace and all.
    async fn record(&self, snapshot: &NotebookSnapshot) -> Result<IssuedIdentifier, AppError> {
        let form = Form::new()
            .text(FIELD_STDIN, snapshot.as_str().to_string())
            .text(FIELD_INPUT_TYPE, NOTEBOOK_INPUT_TYPE);

        log::debug!(
            "POST {} (recording {} bytes)",
            self.record_endpoint,
            snapshot.len()
        );
        let response = self
            .client
            .post(self.record_endpoint.as_str())
            .multipart(form)
            .send()
            .await?;
        let result = extract_response_text(response).await?;

        if result.status != StatusCode::OK {
            return Err(AppError::RecorderService {
                status: result.status,
                body_preview: body_preview(&result.data),
            });
        }

        Ok(IssuedIdentifier::new(result.data))
    }
}

/// Existence checking by way of the recording service.
///
/// Interchangeable with [`super::HostingProbe`]: same question, same
/// fail-closed answer, different transport.
pub struct ProxiedProbe {
    client: RecorderClient,
    owner: String,
    repo: String,
}

impl ProxiedProbe {
    pub fn new(client: RecorderClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

#[async_trait::async_trait]
impl super::ExistenceProbe for ProxiedProbe {
    async fn exists(&self, path: &NotebookPath) -> bool {
        let repo_path = repo_file_path(path);
        match self.client.lookup(&self.owner, &self.repo, &repo_path).await {
            Ok(payload) => {
                log::debug!(
                    "Lookup verdict for {}: return code {}",
                    repo_path, payload.return_code
                );
                payload.indicates_existing()
            }
            Err(e) => {
                log::warn!("Lookup of {} failed, treating as absent: {}", repo_path, e);
                false
            }
        }
    }
}
