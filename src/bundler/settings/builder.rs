//! Builder for constructing Settings.

use super::{
    DebianSettings, DmgSettings, FileConfig, HostPlatform, MacOsSettings, PackageSettings,
    Settings, ToolSettings, WindowsSettings,
};
use crate::bundler::paths::ProjectLayout;
use std::ffi::OsString;
use std::path::PathBuf;

/// Builder for constructing [`Settings`].
///
/// Every platform section starts from its Generation Two defaults; a config
/// file and CLI flags are layered on top, in that order.
///
/// # Examples
///
/// ```no_run
/// use generation_two_bundler::bundler::{HostPlatform, ProjectLayout, SettingsBuilder};
///
/// # fn example() -> generation_two_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .layout(ProjectLayout::from_script_dir("generation_two")?)
///     .host(HostPlatform::Linux)
///     .python("/usr/bin/python3")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    layout: Option<ProjectLayout>,
    host: Option<HostPlatform>,
    package: PackageSettings,
    windows: WindowsSettings,
    macos: MacOsSettings,
    dmg: DmgSettings,
    debian: DebianSettings,
    python: Option<PathBuf>,
    install_missing_tools: Option<bool>,
    search_path: Option<OsString>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the script directory / project root pair.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn layout(mut self, layout: ProjectLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Overrides host detection.
    ///
    /// Default: [`HostPlatform::detect`]
    pub fn host(mut self, host: HostPlatform) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets package inputs and naming.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package = settings;
        self
    }

    /// Sets Windows executable settings.
    pub fn windows_settings(mut self, settings: WindowsSettings) -> Self {
        self.windows = settings;
        self
    }

    /// Sets macOS bundle settings.
    pub fn macos_settings(mut self, settings: MacOsSettings) -> Self {
        self.macos = settings;
        self
    }

    /// Sets DMG layout settings.
    pub fn dmg_settings(mut self, settings: DmgSettings) -> Self {
        self.dmg = settings;
        self
    }

    /// Sets Debian conversion settings.
    pub fn debian_settings(mut self, settings: DebianSettings) -> Self {
        self.debian = settings;
        self
    }

    /// Sets the Python interpreter.
    ///
    /// Default: `python` on Windows, `python3` elsewhere
    pub fn python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = Some(python.into());
        self
    }

    /// Enables or disables pip installation of missing tools.
    ///
    /// Default: true
    pub fn install_missing_tools(mut self, install: bool) -> Self {
        self.install_missing_tools = Some(install);
        self
    }

    /// Replaces `PATH` when locating command-line tools.
    pub fn search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    /// Applies every section of a parsed config file.
    ///
    /// Values set explicitly on the builder afterwards win.
    pub fn config(mut self, config: FileConfig) -> Self {
        self.package = config.package;
        self.windows = config.windows;
        self.macos = config.macos;
        self.dmg = config.dmg;
        self.debian = config.debian;
        if let Some(python) = config.python {
            self.python = Some(python);
        }
        if let Some(install) = config.install_missing_tools {
            self.install_missing_tools = Some(install);
        }
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout was not set.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let tools = ToolSettings::new(
            self.python.unwrap_or_else(ToolSettings::default_python),
            self.install_missing_tools.unwrap_or(true),
            self.search_path,
        );

        Ok(Settings::new(
            self.layout.context("layout is required")?,
            self.host.unwrap_or_else(HostPlatform::detect),
            self.package,
            self.windows,
            self.macos,
            self.dmg,
            self.debian,
            tools,
        ))
    }
}
