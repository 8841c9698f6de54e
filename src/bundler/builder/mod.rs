//! Bundle orchestration and coordination.
//!
//! - [`checksum`] - SHA-256 of relocated artifacts
//! - [`clean`] - removal of stale output directories
//! - [`plan`] - ordered build list from host and flags
//! - [`orchestrator`] - the [`Bundler`] running each planned build
//! - [`tool_detection`] - external tool lookup and PyInstaller installation

pub mod checksum;
pub mod clean;
pub mod orchestrator;
pub mod plan;
pub mod tool_detection;

pub use clean::clean_output_dirs;
pub use orchestrator::{BundledArtifact, Bundler};
pub use plan::{BuildPlan, BuildRequest};
