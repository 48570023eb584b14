use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depsync operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepsyncError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unreadable or malformed manifest (e.g. package.json).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check that the package.json exists and is valid JSON"))]
    Manifest { message: String },

    /// Version text does not conform to the semver grammar.
    #[error("Invalid version '{version}'")]
    #[diagnostic(help("Versions look like 1.2.3, v1.2.3-alpha.1 or 1.x"))]
    InvalidVersion { version: String },

    /// Unknown comparison operator.
    #[error("Invalid operator '{operator}', expected one of >|>=|=|<=|<")]
    InvalidOperator { operator: String },

    /// The merge source does not declare any dependencies.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Package-manager invocation failed.
    #[error("Install failed: {message}")]
    Install { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepsyncResult<T> = miette::Result<T>;
