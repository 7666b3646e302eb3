// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;
use url::Url;

/// Credential for the hosting provider API (the direct existence check).
///
/// Providers rotate token formats, so the only validation is what an
/// HTTP header demands: non-empty, visible ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token with validation.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.is_empty() {
            return Err(ValidationError::InvalidCredential {
                reason: "token cannot be empty".to_string(),
            });
        }

        if !token.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ValidationError::InvalidCredential {
                reason: "token must be visible ASCII with no whitespace".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Get the token as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact the credential in display
        let shown = self.0.len().min(4);
        write!(f, "{}...", &self.0[..shown])
    }
}

/// A validated HTTP(S) service endpoint or URL base.
///
/// The raw string is kept (minus any trailing slashes) rather than the
/// parser's normalized form, so URLs derived from it stay byte-faithful
/// to the configured value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint(String);

impl ServiceEndpoint {
    /// Create a new validated endpoint.
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        let trimmed = url.trim();
        match Url::parse(trimmed) {
            Ok(parsed) => {
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(ValidationError::InvalidEndpoint {
                        url: trimmed.to_string(),
                        reason: "only HTTP and HTTPS endpoints are supported".to_string(),
                    });
                }
                Ok(Self(trimmed.trim_end_matches('/').to_string()))
            }
            Err(e) => Err(ValidationError::InvalidEndpoint {
                url: trimmed.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the endpoint as a string, guaranteed to have no trailing slash.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier issued by the recording service.
///
/// The entire raw response body, untouched: not trimmed, not parsed.
/// It only ever travels into the viewer URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedIdentifier(String);

impl IssuedIdentifier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssuedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The final output of a successful issuance — a shareable viewer URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerLink(String);

impl ViewerLink {
    pub fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewerLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
