//! Top-level error types for the bundler binary.
//!
//! Wraps library errors from [`crate::bundler`] together with CLI argument
//! errors so `main` can report a single message and exit code.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Process exit code for this error.
    ///
    /// Argument errors use 2 to match clap's own usage failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            BundlerError::Cli(CliError::InvalidArguments { .. }) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors_exit_with_usage_code() {
        let err = BundlerError::from(CliError::InvalidArguments {
            reason: "bad".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn bundler_errors_exit_with_failure_code() {
        let err = BundlerError::from(crate::bundler::Error::GenericError("x".into()));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "x");
    }
}
