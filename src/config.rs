// src/config.rs
use crate::constants::{
    DEFAULT_BRANCH, DEFAULT_HOSTING_API_BASE, DEFAULT_HOSTING_WEB_BASE, DEFAULT_LOOKUP_ENDPOINT,
    DEFAULT_OWNER, DEFAULT_RECORD_ENDPOINT, DEFAULT_REPO, DEFAULT_VIEWER_BASE,
    DEFAULT_VIEWER_CONTENT_BASE, GITHUB_TOKEN_ENV, RECORD_COOKIE_ENV,
};
use crate::error::AppError;
use crate::types::{AccessToken, ServiceEndpoint, ValidationError};
use clap::{Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub action: ToolbarAction,

    /// Recording service endpoint receiving notebook uploads
    #[arg(long, global = true, value_name = "URL")]
    pub record_endpoint: Option<String>,

    /// Proxied existence-check endpoint on the recording service
    #[arg(long, global = true, value_name = "URL")]
    pub lookup_endpoint: Option<String>,

    /// Hosting provider REST API base (direct existence check)
    #[arg(long, global = true, value_name = "URL")]
    pub hosting_api_base: Option<String>,

    /// Hosting provider web base (edit / create pages)
    #[arg(long, global = true, value_name = "URL")]
    pub hosting_web_base: Option<String>,

    /// Viewer page that shareable links point at
    #[arg(long, global = true, value_name = "URL")]
    pub viewer_base: Option<String>,

    /// Base URL that serves recorded notebook content
    #[arg(long, global = true, value_name = "URL")]
    pub viewer_content_base: Option<String>,

    /// Owner of the target repository
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Name of the target repository
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// Branch the edit / create pages commit to
    #[arg(long, global = true)]
    pub branch: Option<String>,

    /// Existence-check variant: 'direct' (provider API) or 'proxy' (recording service)
    #[arg(long, global = true, value_name = "VARIANT", default_value = "direct")]
    pub check_via: String,

    /// Hosting provider credential (defaults to $GITHUB_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub github_token: Option<String>,

    /// Session cookie sent with recording service requests (defaults to $NBSHARE_COOKIE)
    #[arg(long, global = true, value_name = "COOKIE")]
    pub cookie: Option<String>,

    /// Pipe mode - print the resulting URL to stdout instead of clipboard/browser
    #[arg(short = 'p', long, global = true, default_value_t = false)]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// The two toolbar commands, each taking only the current notebook.
#[derive(Subcommand, Debug)]
pub enum ToolbarAction {
    /// Upload the notebook to the recording service and copy a shareable viewer link
    Link {
        /// Path to the notebook file (.ipynb)
        notebook: PathBuf,
    },
    /// Stage the notebook for publication: existence check, clipboard, browser handoff
    Publish {
        /// Path to the notebook file (.ipynb)
        notebook: PathBuf,
    },
}

/// Which flow an invocation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    Link,
    Publish,
}

/// Which transport answers the existence question for the publish flow.
///
/// Both variants answer the same boolean and share the same fail-closed
/// policy; the choice is purely a transport strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeVariant {
    /// Ask the hosting provider's contents endpoint directly.
    Direct,
    /// Ask the recording service to look the path up on our behalf.
    Proxied,
}

impl ProbeVariant {
    /// Parse the `--check-via` flag value.
    pub fn from_flag(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "proxy" | "proxied" => Ok(Self::Proxied),
            other => Err(ValidationError::UnknownProbeVariant {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProbeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Proxied => write!(f, "proxy"),
        }
    }
}

/// Resolved invocation configuration — validated and ready to drive a flow.
///
/// Every endpoint and repository coordinate the flows touch lives here,
/// so tests substitute targets without touching any logic.
#[derive(Debug, Clone)]
pub struct ToolbarConfig {
    pub command: ToolbarCommand,
    pub notebook: PathBuf,
    pub record_endpoint: ServiceEndpoint,
    pub lookup_endpoint: ServiceEndpoint,
    pub hosting_api_base: ServiceEndpoint,
    pub hosting_web_base: ServiceEndpoint,
    pub viewer_base: ServiceEndpoint,
    pub viewer_content_base: ServiceEndpoint,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub probe_variant: ProbeVariant,
    pub github_token: Option<AccessToken>,
    pub record_cookie: Option<String>,
    pub pipe: bool,
    pub verbose: bool,
}

impl ToolbarConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let (command, notebook) = match cli.action {
            ToolbarAction::Link { notebook } => (ToolbarCommand::Link, notebook),
            ToolbarAction::Publish { notebook } => (ToolbarCommand::Publish, notebook),
        };

        let github_token = match cli
            .github_token
            .or_else(|| env_non_empty(GITHUB_TOKEN_ENV))
        {
            Some(raw) => Some(AccessToken::new(raw)?),
            None => None,
        };

        let record_cookie = cli.cookie.or_else(|| env_non_empty(RECORD_COOKIE_ENV));
        if let Some(cookie) = &record_cookie {
            if cookie.chars().any(|c| c.is_control()) {
                return Err(ValidationError::InvalidCredential {
                    reason: "session cookie cannot contain control characters".to_string(),
                }
                .into());
            }
        }

        Ok(ToolbarConfig {
            command,
            notebook,
            record_endpoint: endpoint_or(cli.record_endpoint, DEFAULT_RECORD_ENDPOINT)?,
            lookup_endpoint: endpoint_or(cli.lookup_endpoint, DEFAULT_LOOKUP_ENDPOINT)?,
            hosting_api_base: endpoint_or(cli.hosting_api_base, DEFAULT_HOSTING_API_BASE)?,
            hosting_web_base: endpoint_or(cli.hosting_web_base, DEFAULT_HOSTING_WEB_BASE)?,
            viewer_base: endpoint_or(cli.viewer_base, DEFAULT_VIEWER_BASE)?,
            viewer_content_base: endpoint_or(cli.viewer_content_base, DEFAULT_VIEWER_CONTENT_BASE)?,
            owner: repo_component(cli.owner.unwrap_or_else(|| DEFAULT_OWNER.to_string()))?,
            repo: repo_component(cli.repo.unwrap_or_else(|| DEFAULT_REPO.to_string()))?,
            branch: branch_name(cli.branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string()))?,
            probe_variant: ProbeVariant::from_flag(&cli.check_via)?,
            github_token,
            record_cookie,
            pipe: cli.pipe,
            verbose: cli.verbose,
        })
    }
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            command: ToolbarCommand::Link,
            notebook: PathBuf::from("notebook.ipynb"),
            record_endpoint: ServiceEndpoint::parse(DEFAULT_RECORD_ENDPOINT)
                .expect("default record endpoint should be valid"),
            lookup_endpoint: ServiceEndpoint::parse(DEFAULT_LOOKUP_ENDPOINT)
                .expect("default lookup endpoint should be valid"),
            hosting_api_base: ServiceEndpoint::parse(DEFAULT_HOSTING_API_BASE)
                .expect("default hosting API base should be valid"),
            hosting_web_base: ServiceEndpoint::parse(DEFAULT_HOSTING_WEB_BASE)
                .expect("default hosting web base should be valid"),
            viewer_base: ServiceEndpoint::parse(DEFAULT_VIEWER_BASE)
                .expect("default viewer base should be valid"),
            viewer_content_base: ServiceEndpoint::parse(DEFAULT_VIEWER_CONTENT_BASE)
                .expect("default viewer content base should be valid"),
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            probe_variant: ProbeVariant::Direct,
            github_token: None,
            record_cookie: None,
            pipe: false,
            verbose: false,
        }
    }
}

/// Reads an environment variable, treating empty values as unset.
/// GUI-launched processes sometimes inherit variables set to "".
fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn endpoint_or(value: Option<String>, default: &str) -> Result<ServiceEndpoint, AppError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    Ok(ServiceEndpoint::parse(&raw)?)
}

/// Validates a repository owner or name for use in URL path segments.
fn repo_component(value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    let invalid = |reason: &str| ValidationError::InvalidRepoComponent {
        value: value.clone(),
        reason: reason.to_string(),
    };

    if value.is_empty() {
        return Err(invalid("cannot be empty").into());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(invalid("may only contain alphanumerics, '-', '_' and '.'").into());
    }

    Ok(value)
}

/// Validates a branch name. Branches may contain '/' (e.g. release
/// trains), so only obviously URL-breaking input is rejected.
fn branch_name(value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    let invalid = |reason: &str| ValidationError::InvalidRepoComponent {
        value: value.clone(),
        reason: reason.to_string(),
    };

    if value.is_empty() {
        return Err(invalid("cannot be empty").into());
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("cannot contain whitespace").into());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> CommandLineInput {
        CommandLineInput::try_parse_from(args).expect("CLI input should parse")
    }

    #[test]
    fn resolve_applies_defaults() {
        let config =
            ToolbarConfig::resolve(cli(&["nbshare", "link", "demo.ipynb"])).expect("should resolve");

        assert_eq!(config.command, ToolbarCommand::Link);
        assert_eq!(config.notebook, PathBuf::from("demo.ipynb"));
        assert_eq!(
            config.record_endpoint.as_str(),
            "https://pisa.intel.com/API/Record"
        );
        assert_eq!(config.owner, "intel-sandbox");
        assert_eq!(config.repo, "jupyterlite");
        assert_eq!(config.branch, "main");
        assert_eq!(config.probe_variant, ProbeVariant::Direct);
        assert!(!config.pipe);
    }

    #[test]
    fn resolve_honors_overrides() {
        let config = ToolbarConfig::resolve(cli(&[
            "nbshare",
            "publish",
            "reports/q3.ipynb",
            "--owner",
            "acme",
            "--repo",
            "notebooks",
            "--branch",
            "release/2025",
            "--check-via",
            "proxy",
            "--record-endpoint",
            "http://localhost:9000/record/",
            "--pipe",
        ]))
        .expect("should resolve");

        assert_eq!(config.command, ToolbarCommand::Publish);
        assert_eq!(config.owner, "acme");
        assert_eq!(config.repo, "notebooks");
        assert_eq!(config.branch, "release/2025");
        assert_eq!(config.probe_variant, ProbeVariant::Proxied);
        assert_eq!(
            config.record_endpoint.as_str(),
            "http://localhost:9000/record"
        );
        assert!(config.pipe);
    }

    #[test]
    fn resolve_rejects_bad_input() {
        assert!(ToolbarConfig::resolve(cli(&[
            "nbshare",
            "link",
            "demo.ipynb",
            "--record-endpoint",
            "not a url",
        ]))
        .is_err());
        assert!(ToolbarConfig::resolve(cli(&[
            "nbshare",
            "publish",
            "demo.ipynb",
            "--owner",
            "bad/owner",
        ]))
        .is_err());
        assert!(ToolbarConfig::resolve(cli(&[
            "nbshare",
            "publish",
            "demo.ipynb",
            "--check-via",
            "carrier-pigeon",
        ]))
        .is_err());
    }

    #[test]
    fn explicit_token_flag_wins() {
        let config = ToolbarConfig::resolve(cli(&[
            "nbshare",
            "publish",
            "demo.ipynb",
            "--github-token",
            "ghp_flagtoken123",
        ]))
        .expect("should resolve");
        assert_eq!(
            config.github_token.map(|t| t.as_str().to_string()),
            Some("ghp_flagtoken123".to_string())
        );
    }

    #[test]
    fn cookie_with_control_characters_is_rejected() {
        assert!(ToolbarConfig::resolve(cli(&[
            "nbshare",
            "link",
            "demo.ipynb",
            "--cookie",
            "session=abc\r\nInjected: yes",
        ]))
        .is_err());
    }

    #[test]
    fn probe_variant_parsing() {
        assert_eq!(ProbeVariant::from_flag("direct"), Ok(ProbeVariant::Direct));
        assert_eq!(ProbeVariant::from_flag("Proxy"), Ok(ProbeVariant::Proxied));
        assert_eq!(
            ProbeVariant::from_flag("proxied"),
            Ok(ProbeVariant::Proxied)
        );
        assert!(ProbeVariant::from_flag("other").is_err());
    }
}
