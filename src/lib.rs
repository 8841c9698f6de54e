//! Release bundler for the Generation Two GUI application.
//!
//! Builds one artifact per platform:
//! - Windows single-file executable (.exe)
//! - Linux Debian package (.deb)
//! - macOS disk image (.dmg) around the .app bundle
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
