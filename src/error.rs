use thiserror::Error;

use crate::process::ToolFailure;

/// Process exit codes, one per error category.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_ENVIRONMENT: i32 = 3;
pub const EXIT_USER_ABORT: i32 = 4;

/// Unified error type for herald operations
#[derive(Error, Debug)]
pub enum HeraldError {
    #[error("{0}")]
    Runtime(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Environment(String),

    #[error("operation cancelled by user")]
    UserAbort,

    #[error("{message}: {source}")]
    Tool {
        message: String,
        #[source]
        source: ToolFailure,
    },

    #[error("failed to parse {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in herald
pub type Result<T> = std::result::Result<T, HeraldError>;

impl HeraldError {
    /// Create a runtime error
    pub fn runtime(msg: impl Into<String>) -> Self {
        HeraldError::Runtime(msg.into())
    }

    /// Create a not-found error (missing release, empty history)
    pub fn not_found(msg: impl Into<String>) -> Self {
        HeraldError::NotFound(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        HeraldError::Config(msg.into())
    }

    /// Create an environment error (missing tool, not a repository)
    pub fn environment(msg: impl Into<String>) -> Self {
        HeraldError::Environment(msg.into())
    }

    /// Wrap a failed external tool invocation
    pub fn tool(msg: impl Into<String>, source: ToolFailure) -> Self {
        HeraldError::Tool {
            message: msg.into(),
            source,
        }
    }

    /// Wrap a JSON decoding failure for the named payload
    pub fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        HeraldError::Json {
            what: what.into(),
            source,
        }
    }

    /// Exit code reported by the binary for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HeraldError::Config(_) => EXIT_CONFIG,
            HeraldError::Environment(_) => EXIT_ENVIRONMENT,
            HeraldError::UserAbort => EXIT_USER_ABORT,
            _ => EXIT_RUNTIME,
        }
    }
}
