// src/constants.rs
//! Domain constants that define the fixed surface of the two flows.
//!
//! Each constant is named for the contract it belongs to. Reading them
//! top to bottom tells the story of an invocation: where content is
//! recorded, how the viewer link is composed, which repository the
//! publish flow targets, and what the user is told.

// ---------------------------------------------------------------------------
// Recording service (link issuance + proxied existence lookup)
// ---------------------------------------------------------------------------

/// Default endpoint that receives notebook content and answers with an
/// opaque identifier in the response body.
pub const DEFAULT_RECORD_ENDPOINT: &str = "https://pisa.intel.com/API/Record";

/// Default endpoint for the proxied existence lookup. Same service as
/// the record endpoint; answers with a `ReturnCode` payload.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "https://pisa.intel.com/API/CheckFile";

/// Multipart field carrying the notebook JSON on the record endpoint.
pub const FIELD_STDIN: &str = "Stdin";

/// Multipart field tagging the content type on the record endpoint.
pub const FIELD_INPUT_TYPE: &str = "InputType";

/// Fixed content-type tag sent with every recorded notebook.
pub const NOTEBOOK_INPUT_TYPE: &str = ".ipynb";

/// Multipart fields for the proxied existence lookup.
pub const FIELD_OWNER: &str = "Owner";
pub const FIELD_REPO: &str = "Repo";
pub const FIELD_FILE_PATH: &str = "FilePath";

// ---------------------------------------------------------------------------
// Viewer link composition
// ---------------------------------------------------------------------------

/// Default base page of the hosted notebook viewer. The issued
/// identifier is handed to it through the `fromURL` query parameter.
pub const DEFAULT_VIEWER_BASE: &str = "https://wiki.intel.com/Jupyter/lab";

/// Default location where recorded notebooks are served from; the
/// identifier plus the notebook extension completes the content URL.
pub const DEFAULT_VIEWER_CONTENT_BASE: &str = "https://wiki.intel.com/tmp";

// ---------------------------------------------------------------------------
// Publish target repository
// ---------------------------------------------------------------------------

/// Default REST API base of the hosting provider (direct existence check).
pub const DEFAULT_HOSTING_API_BASE: &str = "https://api.github.com";

/// Default web base of the hosting provider (edit / create pages).
pub const DEFAULT_HOSTING_WEB_BASE: &str = "https://github.com";

/// Default repository that published notebooks land in.
pub const DEFAULT_OWNER: &str = "intel-sandbox";
pub const DEFAULT_REPO: &str = "jupyterlite";

/// Branch the edit/create pages commit to.
pub const DEFAULT_BRANCH: &str = "main";

/// Directory inside the target repository that holds published
/// notebooks. Every logical notebook path is rooted here.
pub const CONTENT_ROOT: &str = "content";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable consulted for the hosting provider credential.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable consulted for the recorder session cookie.
pub const RECORD_COOKIE_ENV: &str = "NBSHARE_COOKIE";

// ---------------------------------------------------------------------------
// User-visible dialog texts
// ---------------------------------------------------------------------------

/// Confirmation shown after the viewer link lands on the clipboard.
pub const LINK_COPIED_NOTICE: &str = "Copied the link to the clipboard.";

/// Instruction shown after the notebook content lands on the clipboard
/// and before the destination page opens.
pub const PUBLISH_PASTE_NOTICE: &str =
    "Copied the Jupyter notebook to the clipboard.\nPlease paste the content to the opened page as a commit.";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unexpected response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
