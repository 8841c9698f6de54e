//! Error types for bundling operations.
//!
//! Provides the [`Error`] enum, a [`Context`] extension for attaching
//! human-readable context to results and options, and [`ErrorExt`] for
//! tagging filesystem errors with the path that caused them.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process::ExitStatus,
};

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while producing a release artifact.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error with additional context.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// A required input file was not found in any of the searched locations.
    #[error("{what} not found in {}", display_paths(.searched))]
    ResourceNotFound {
        /// Human-readable name of the missing input.
        what: &'static str,
        /// Every location that was checked.
        searched: Vec<PathBuf>,
    },

    /// An external command could not be started.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Rendered command line.
        command: String,
        /// Spawn error.
        error: std::io::Error,
    },

    /// An external command ran but exited unsuccessfully.
    #[error("`{command}` failed with {status}")]
    CommandStatus {
        /// Rendered command line.
        command: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },

    /// A required external tool is missing and installation is disabled.
    #[error("{0} is not installed and automatic installation is disabled")]
    ToolMissing(String),

    /// Filesystem error with the operation and path that failed.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done.
        context: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying I/O error.
        error: std::io::Error,
    },

    /// I/O error.
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// Recipe template could not be registered.
    #[error("invalid recipe template: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Recipe template could not be rendered.
    #[error("failed to render recipe: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Invalid glob pattern.
    #[error("invalid artifact pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    /// Config file could not be parsed.
    #[error("invalid config file {}: {error}", .path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Parse error.
        error: toml::de::Error,
    },

    /// The freezing tool produced a directory that is not an application bundle.
    #[error("invalid app bundle structure: {} (expected a Contents/ directory inside)", .0.display())]
    InvalidAppBundle(PathBuf),

    /// Generic error.
    #[error("{0}")]
    GenericError(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Attach context to a fallible value.
pub trait Context<T> {
    /// Wrap the error value with additional context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Wrap the error value with additional context that is evaluated lazily.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Tag I/O errors with the operation and path involved.
pub trait ErrorExt<T> {
    /// Convert an I/O error into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Return early with a [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:literal, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
