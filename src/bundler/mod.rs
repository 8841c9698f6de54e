//! Release bundling for Generation Two.
//!
//! Produces one artifact per platform by driving external packaging tools:
//!
//! - **Windows**: single-file `.exe` via PyInstaller
//! - **Linux**: `.deb` via a source distribution and stdeb
//! - **macOS**: `.app` via PyInstaller, wrapped into a `.dmg` by create-dmg
//!
//! Inputs are resolved once with [`resolve_inputs`] before any tool runs,
//! then [`Bundler`] runs the requested builds one after another.

pub mod builder;
pub mod command;
pub mod error;
pub mod freeze;
pub mod paths;
pub mod platform;
pub mod recipe;
pub mod report;
pub mod settings;
pub mod utils;

pub use builder::{BuildPlan, BuildRequest, BundledArtifact, Bundler, clean_output_dirs};
pub use error::{Error, Result};
pub use paths::{ProjectLayout, ResolvedInputs, resolve_inputs};
pub use platform::PackageType;
pub use report::Reporter;
pub use settings::{FileConfig, HostPlatform, Settings, SettingsBuilder};
