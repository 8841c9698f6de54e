//! Core Settings struct and implementations.

use super::{
    DebianSettings, DmgSettings, HostPlatform, MacOsSettings, PackageSettings, ToolSettings,
    WindowsSettings,
};
use crate::bundler::paths::ProjectLayout;

/// Main settings for bundler operations.
///
/// Built once at startup via [`SettingsBuilder`](super::SettingsBuilder) and
/// passed by reference to every step, so no step depends on global state.
///
/// # Examples
///
/// ```no_run
/// use generation_two_bundler::bundler::{ProjectLayout, SettingsBuilder};
///
/// # fn example() -> generation_two_bundler::bundler::Result<()> {
/// let layout = ProjectLayout::from_script_dir("generation_two")?;
/// let settings = SettingsBuilder::new().layout(layout).build()?;
/// println!("Project root: {}", settings.layout().project_root().display());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    layout: ProjectLayout,
    host: HostPlatform,
    package: PackageSettings,
    windows: WindowsSettings,
    macos: MacOsSettings,
    dmg: DmgSettings,
    debian: DebianSettings,
    tools: ToolSettings,
}

impl Settings {
    /// Returns the script directory / project root pair.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Returns the detected (or overridden) host platform.
    pub fn host(&self) -> &HostPlatform {
        &self.host
    }

    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns package inputs and naming.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns Windows executable settings.
    pub fn windows(&self) -> &WindowsSettings {
        &self.windows
    }

    /// Returns macOS bundle settings.
    pub fn macos(&self) -> &MacOsSettings {
        &self.macos
    }

    /// Returns DMG layout settings.
    pub fn dmg(&self) -> &DmgSettings {
        &self.dmg
    }

    /// Returns Debian conversion settings.
    pub fn debian(&self) -> &DebianSettings {
        &self.debian
    }

    /// Returns interpreter and tool lookup settings.
    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        layout: ProjectLayout,
        host: HostPlatform,
        package: PackageSettings,
        windows: WindowsSettings,
        macos: MacOsSettings,
        dmg: DmgSettings,
        debian: DebianSettings,
        tools: ToolSettings,
    ) -> Self {
        Self {
            layout,
            host,
            package,
            windows,
            macos,
            dmg,
            debian,
            tools,
        }
    }
}
