//! External tool configuration.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Interpreter and tool lookup settings.
#[derive(Clone, Debug)]
pub struct ToolSettings {
    python: PathBuf,
    install_missing_tools: bool,
    search_path: Option<OsString>,
}

impl ToolSettings {
    /// Creates tool settings.
    pub fn new(python: PathBuf, install_missing_tools: bool, search_path: Option<OsString>) -> Self {
        Self {
            python,
            install_missing_tools,
            search_path,
        }
    }

    /// Python interpreter used to run the freezing and packaging tools.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Whether missing Python tools are installed with pip before use.
    pub fn install_missing_tools(&self) -> bool {
        self.install_missing_tools
    }

    /// Search path used instead of `PATH` when locating command-line tools.
    pub fn search_path(&self) -> Option<&OsString> {
        self.search_path.as_ref()
    }

    /// Platform default interpreter name.
    pub fn default_python() -> PathBuf {
        if cfg!(windows) {
            PathBuf::from("python")
        } else {
            PathBuf::from("python3")
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::new(Self::default_python(), true, None)
    }
}
