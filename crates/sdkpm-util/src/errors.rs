use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all sdkpm operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SdkpmError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed universe descriptor.
    #[error("Universe error: {message}")]
    #[diagnostic(help("Check the universe file for syntax errors and invalid versions"))]
    Universe { message: String },

    /// Invalid global configuration (`~/.sdkpm/config.toml`).
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.sdkpm/config.toml, or set SDKPM_HOME to another directory"))]
    Config { message: String },

    /// Dependency resolution failed (missing package, version unavailable).
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SdkpmResult<T> = miette::Result<T>;
