//! Configuration structures for bundling operations.
//!
//! This module provides the settings consumed by every platform bundler:
//! package inputs, platform-specific naming and layout, tool lookup, and
//! the optional `bundler.toml` file they can be loaded from.

mod builder;
mod config;
mod core;
mod host;
mod linux;
mod macos;
mod package;
mod tools;
mod windows;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use config::{CONFIG_FILE_NAME, FileConfig};
pub use self::core::Settings;
pub use host::HostPlatform;
pub use linux::DebianSettings;
pub use macos::{DmgSettings, MacOsSettings};
pub use package::PackageSettings;
pub use tools::ToolSettings;
pub use windows::WindowsSettings;
