//! macOS platform-specific settings.

use serde::Deserialize;

/// macOS application bundle (.app) configuration.
///
/// # Configuration
///
/// ```toml
/// [macos]
/// bundle_name = "GenerationTwo"
/// bundle_identifier = "com.worldquant.generationtwo"
/// ```
///
/// # See Also
///
/// - [`DmgSettings`] - DMG disk image configuration
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MacOsSettings {
    /// Name of the app bundle and of the frozen executable inside it.
    pub bundle_name: String,

    /// CFBundleIdentifier written by the freezing tool.
    pub bundle_identifier: String,
}

impl MacOsSettings {
    /// Directory name of the finished bundle, e.g. `GenerationTwo.app`.
    pub fn app_file_name(&self) -> String {
        format!("{}.app", self.bundle_name)
    }

    /// File name of the disk image, e.g. `GenerationTwo.dmg`.
    pub fn dmg_file_name(&self) -> String {
        format!("{}.dmg", self.bundle_name)
    }
}

impl Default for MacOsSettings {
    fn default() -> Self {
        Self {
            bundle_name: "GenerationTwo".into(),
            bundle_identifier: "com.worldquant.generationtwo".into(),
        }
    }
}

/// macOS DMG disk image configuration.
///
/// Window geometry passed to `create-dmg`.
///
/// # Configuration
///
/// ```toml
/// [dmg]
/// window_position = [200, 120]
/// window_size = [800, 400]
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DmgSettings {
    /// Volume name shown in Finder.
    pub volume_name: String,

    /// Finder window position (x, y).
    pub window_position: (u32, u32),

    /// Finder window size (width, height) in pixels.
    pub window_size: (u32, u32),

    /// Icon size in pixels.
    pub icon_size: u32,

    /// Position of the Applications drop link (x, y).
    pub app_drop_link: (u32, u32),
}

impl Default for DmgSettings {
    fn default() -> Self {
        Self {
            volume_name: "Generation Two".into(),
            window_position: (200, 120),
            window_size: (800, 400),
            icon_size: 100,
            app_drop_link: (600, 185),
        }
    }
}
