use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The command completed successfully
    Success = 0,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Structured error payload returned by the catalog backend alongside (or
/// instead of) a data payload.
///
/// This is an application-level failure: the request reached the backend and
/// a well-formed response came back. Transport failures never produce one.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Deserialize, serde::Serialize)]
#[error("error sending request with status \"{status}\" and detail \"{detail}\"")]
pub struct ResponseError {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub detail: String,
}

impl ResponseError {
    pub fn new(status: i64, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

/// Application-specific errors for productctl.
///
/// Step-identifying variants wrap the underlying cause so callers can match
/// on the category of failure via `downcast_ref` while the original error
/// stays reachable through `source()`.
#[derive(Debug, Error)]
pub enum ProductctlError {
    #[error("listing did not have a name and it is required")]
    MissingName,

    #[error("no components declared")]
    NoComponentsDeclared,

    #[error("unable to detach components from product listing")]
    DetachingComponents {
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to query page {page}")]
    QueryPageFailed {
        page: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("pagination exceeded the maximum of {max_pages} pages without collecting every item")]
    PaginationLimitExceeded { max_pages: usize },

    #[error("page {page} returned no items while {remaining} item(s) remain")]
    PaginationStalled { page: usize, remaining: usize },

    #[error("hostname \"{hostname}\" is generated more than once in {group}\n\n💡 Hint: Two certification targets resolve to the same image or chart. Remove the duplicate tag or mapping entry.")]
    HostnameCollision { group: String, hostname: String },

    #[error("unknown api endpoint: {name}\n\n💡 Hint: Choose one of prod, stage, qa, uat or set --custom-endpoint")]
    UnknownEndpoint { name: String },

    #[error(transparent)]
    Backend(#[from] ResponseError),

    #[error("graphql request failed: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("catalog returned neither data nor an error for {operation}")]
    EmptyResponse { operation: String },

    #[error("no API token configured\n\n💡 Hint: Set api-token or api-token-file in your config file, or export PRODUCTCTL_API_TOKEN")]
    MissingApiToken,

    #[error("organization ID \"{value}\" is not a positive integer")]
    InvalidOrgId { value: String },

    #[error("Failed to read config file: {path}\nDetails: {details}")]
    ConfigRead { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax.")]
    ConfigParse { path: PathBuf, details: String },

    #[error("Failed to parse product listing declaration\nDetails: {details}\n\n💡 Hint: Please verify that the declaration is valid YAML with kind, spec and with keys")]
    DeclarationParse { details: String },

    #[error("Failed to parse component mapping\nDetails: {details}\n\n💡 Hint: The mapping needs container_components, operator_components and helm_chart_components keys")]
    MappingParse { details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("error creating backup of {path}\nDetails: {details}")]
    BackupError { path: PathBuf, details: String },

    #[error("invalid certification runner configuration: {reason}")]
    InvalidRunnerConfig { reason: String },
}
