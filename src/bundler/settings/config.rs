//! Optional TOML config file.

use super::{DebianSettings, DmgSettings, MacOsSettings, PackageSettings, WindowsSettings};
use crate::bundler::error::{Error, ErrorExt, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the script directory.
pub const CONFIG_FILE_NAME: &str = "bundler.toml";

/// Contents of `bundler.toml`.
///
/// Every key is optional; missing sections keep their defaults and unknown
/// keys are rejected so typos surface immediately.
///
/// ```toml
/// python = "/usr/bin/python3"
/// install_missing_tools = false
///
/// [macos]
/// bundle_identifier = "com.example.generationtwo"
///
/// [dmg]
/// window_size = [640, 360]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Python interpreter.
    pub python: Option<PathBuf>,
    /// Install PyInstaller/stdeb with pip when missing.
    pub install_missing_tools: Option<bool>,
    /// `[package]` section.
    pub package: PackageSettings,
    /// `[windows]` section.
    pub windows: WindowsSettings,
    /// `[macos]` section.
    pub macos: MacOsSettings,
    /// `[dmg]` section.
    pub dmg: DmgSettings,
    /// `[debian]` section.
    pub debian: DebianSettings,
}

impl FileConfig {
    /// Reads and parses a config file.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .fs_context("reading config file", path)?;
        toml::from_str(&text).map_err(|error| Error::Config {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Loads `path` if given, else `<script_dir>/bundler.toml` if it exists,
    /// else the defaults.
    pub async fn discover(explicit: Option<&Path>, script_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        let default_path = script_dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            log::debug!("Using config file {}", default_path.display());
            return Self::load(&default_path).await;
        }

        Ok(Self::default())
    }
}
