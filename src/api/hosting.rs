// src/api/hosting.rs
//! Direct existence checks against the hosting provider's contents API.

use crate::error::AppError;
use crate::links::repo_file_path;
use crate::types::{AccessToken, NotebookPath, ServiceEndpoint};
use reqwest::{header, Client, StatusCode};

/// The provider rejects API requests without a User-Agent.
const USER_AGENT: &str = concat!("nbshare/", env!("CARGO_PKG_VERSION"));

/// Asks the provider's contents endpoint whether a repository path exists.
///
/// Interchangeable with [`super::ProxiedProbe`]: same question, same
/// fail-closed answer, different transport.
pub struct HostingProbe {
    client: Client,
    api_base: ServiceEndpoint,
    owner: String,
    repo: String,
}

impl HostingProbe {
    /// Creates a probe against the provider's REST API.
    ///
    /// Without a token the request goes out unauthenticated. Private
    /// repositories then answer 404 and the flow lands on the create
    /// page, which is the fail-closed outcome anyway.
    pub fn new(
        api_base: ServiceEndpoint,
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: Option<&AccessToken>,
    ) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        match token {
            Some(token) => {
                let raw = format!("token {}", token.as_str());
                let mut value = header::HeaderValue::from_str(&raw).map_err(|e| {
                    AppError::MissingConfiguration(format!("Invalid hosting token format: {}", e))
                })?;
                value.set_sensitive(true);
                headers.insert(header::AUTHORIZATION, value);
            }
            None => {
                log::warn!("No hosting token configured; existence checks run unauthenticated");
            }
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            api_base,
            owner: owner.into(),
            repo: repo.into(),
        })
    }

    async fn check(&self, repo_path: &str) -> Result<bool, AppError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base.as_str(),
            self.owner,
            self.repo,
            repo_path
        );
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        classify_existence(response.status())
    }
}

/// Maps a contents-endpoint status to an existence verdict.
///
/// Only 200 confirms the file and only 404 confirms its absence. Every
/// other status is a service problem, not an answer.
fn classify_existence(status: StatusCode) -> Result<bool, AppError> {
    match status {
        StatusCode::OK => Ok(true),
        StatusCode::NOT_FOUND => Ok(false),
        status => Err(AppError::HostingService { status }),
    }
}

#[async_trait::async_trait]
impl super::ExistenceProbe for HostingProbe {
    async fn exists(&self, path: &NotebookPath) -> bool {
        let repo_path = repo_file_path(path);
        match self.check(&repo_path).await {
            Ok(exists) => {
                log::debug!(
                    "Contents check for {}: {}",
                    repo_path,
                    if exists { "present" } else { "absent" }
                );
                exists
            }
            Err(e) => {
                log::warn!(
                    "Contents check for {} failed, treating as absent: {}",
                    repo_path, e
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_confirms_existence() {
        assert!(matches!(classify_existence(StatusCode::OK), Ok(true)));
    }

    #[test]
    fn not_found_confirms_absence() {
        assert!(matches!(
            classify_existence(StatusCode::NOT_FOUND),
            Ok(false)
        ));
    }

    #[test]
    fn other_statuses_are_service_failures() {
        for status in [
            StatusCode::UNAUTHORIZED,
            StatusCode::FORBIDDEN,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            let result = classify_existence(status);
            assert!(
                matches!(result, Err(AppError::HostingService { status: s }) if s == status),
                "status {} should be a service failure",
                status
            );
        }
    }
}
