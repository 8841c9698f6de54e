//! Package metadata and configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Application inputs and naming shared by every platform.
///
/// The defaults describe the Generation Two GUI. Every field can be
/// overridden from the `[package]` table of the config file.
///
/// # Configuration
///
/// ```toml
/// [package]
/// entry_point = "gui/run_gui.py"
/// resource = "constants/operatorRAW.json"
/// hidden_imports = ["tkinter", "tkinter.ttk"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageSettings {
    /// Human-readable product name used for banners and the DMG volume.
    pub product_name: String,

    /// Entry-point script, relative to the script directory.
    pub entry_point: PathBuf,

    /// JSON resource file, relative to the script directory (primary)
    /// or the project root (fallback).
    pub resource: PathBuf,

    /// Sub-path inside the frozen application where the resource lands.
    pub resource_destination: String,

    /// Modules the freezing tool must bundle even though it cannot see
    /// them being imported.
    pub hidden_imports: Vec<String>,

    /// Stem of the recipe files written into the project root.
    ///
    /// `generation_two` yields `generation_two.spec` and
    /// `generation_two_macos.spec`.
    pub recipe_stem: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: "Generation Two".into(),
            entry_point: PathBuf::from("gui").join("run_gui.py"),
            resource: PathBuf::from("constants").join("operatorRAW.json"),
            resource_destination: "constants".into(),
            hidden_imports: [
                "tkinter",
                "tkinter.ttk",
                "generation_two",
                "generation_two.gui",
                "generation_two.core",
                "generation_two.ollama",
                "generation_two.data_fetcher",
                "generation_two.storage",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            recipe_stem: "generation_two".into(),
        }
    }
}
