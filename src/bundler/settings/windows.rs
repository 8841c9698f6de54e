//! Windows platform-specific settings.

use serde::Deserialize;

/// Single-file Windows executable configuration.
///
/// # Configuration
///
/// ```toml
/// [windows]
/// executable_name = "generation-two"
/// upx = true
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowsSettings {
    /// Executable name without the `.exe` extension.
    pub executable_name: String,

    /// Show a console window next to the GUI.
    ///
    /// Default: false (windowed)
    pub console: bool,

    /// Compress the executable with UPX when available.
    ///
    /// Default: true
    pub upx: bool,
}

impl WindowsSettings {
    /// File name of the produced executable.
    pub fn executable_file_name(&self) -> String {
        format!("{}.exe", self.executable_name)
    }
}

impl Default for WindowsSettings {
    fn default() -> Self {
        Self {
            executable_name: "generation-two".into(),
            console: false,
            upx: true,
        }
    }
}
