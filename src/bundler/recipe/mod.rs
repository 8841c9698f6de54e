//! Freezing-tool recipe generation.
//!
//! Renders PyInstaller `.spec` recipes from Handlebars templates and writes
//! them into the project root. The recipe content is owned by PyInstaller;
//! nothing here validates it, a malformed recipe only surfaces when the tool
//! runs.

mod template;

use crate::bundler::{
    error::{ErrorExt, Result},
    paths::ResolvedInputs,
    settings::Settings,
};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Recipe shapes understood by the bundler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipeKind {
    /// Single-file windowed `.exe`.
    WindowsOneFile,
    /// `EXE` + `COLLECT` + `BUNDLE` producing a `.app`.
    MacOsBundle,
}

impl RecipeKind {
    /// Recipe file name for the given stem.
    pub fn file_name(self, stem: &str) -> String {
        match self {
            RecipeKind::WindowsOneFile => format!("{stem}.spec"),
            RecipeKind::MacOsBundle => format!("{stem}_macos.spec"),
        }
    }

    fn template(self) -> &'static str {
        match self {
            RecipeKind::WindowsOneFile => template::WINDOWS_ONEFILE,
            RecipeKind::MacOsBundle => template::MACOS_BUNDLE,
        }
    }
}

#[derive(Serialize)]
struct RecipeData<'a> {
    entry_point: String,
    project_root: String,
    resource: String,
    resource_destination: &'a str,
    hidden_imports: &'a [String],
    name: &'a str,
    upx: &'static str,
    console: &'static str,
    bundle_identifier: &'a str,
}

/// Renders the recipe text.
pub fn render_recipe(kind: RecipeKind, settings: &Settings, inputs: &ResolvedInputs) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_template_string("recipe", kind.template())?;

    let package = settings.package();
    let (name, upx, console) = match kind {
        RecipeKind::WindowsOneFile => {
            let windows = settings.windows();
            (windows.executable_name.as_str(), windows.upx, windows.console)
        }
        RecipeKind::MacOsBundle => (settings.macos().bundle_name.as_str(), true, false),
    };

    let data = RecipeData {
        entry_point: forward_slashes(&inputs.entry_point),
        project_root: forward_slashes(settings.layout().project_root()),
        resource: forward_slashes(&inputs.resource),
        resource_destination: &package.resource_destination,
        hidden_imports: &package.hidden_imports,
        name,
        upx: python_bool(upx),
        console: python_bool(console),
        bundle_identifier: &settings.macos().bundle_identifier,
    };

    Ok(handlebars.render("recipe", &data)?)
}

/// Renders the recipe and writes it into the project root, replacing any
/// previous recipe of the same kind.
pub async fn write_recipe(kind: RecipeKind, settings: &Settings, inputs: &ResolvedInputs) -> Result<PathBuf> {
    let content = render_recipe(kind, settings, inputs)?;
    let path = settings
        .layout()
        .project_root()
        .join(kind.file_name(&settings.package().recipe_stem));

    tokio::fs::write(&path, content)
        .await
        .fs_context("writing recipe file", &path)?;
    log::debug!("Wrote {:?} recipe to {}", kind, path.display());

    Ok(path)
}

/// PyInstaller accepts forward slashes on every platform and they survive
/// inside Python raw strings.
fn forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{HostPlatform, ProjectLayout, SettingsBuilder};

    fn fixture(tmp: &Path) -> (Settings, ResolvedInputs) {
        let script_dir = tmp.join("generation_two");
        let settings = SettingsBuilder::new()
            .layout(ProjectLayout::from_script_dir(&script_dir).unwrap())
            .host(HostPlatform::Linux)
            .build()
            .unwrap();
        let inputs = ResolvedInputs {
            entry_point: script_dir.join("gui").join("run_gui.py"),
            resource: script_dir.join("constants").join("operatorRAW.json"),
        };
        (settings, inputs)
    }

    #[test]
    fn windows_recipe_is_single_file_and_windowed() {
        let tmp = tempfile::tempdir().unwrap();
        let (settings, inputs) = fixture(tmp.path());

        let recipe = render_recipe(RecipeKind::WindowsOneFile, &settings, &inputs).unwrap();

        assert!(recipe.contains("name='generation-two',"));
        assert!(recipe.contains("console=False,"));
        assert!(recipe.contains("upx=True,"));
        assert!(recipe.contains("hooksconfig={},"));
        assert!(recipe.contains("        'tkinter.ttk',\n"));
        assert!(recipe.contains("        'generation_two.data_fetcher',\n"));
        assert!(recipe.contains("'constants'),"));
        assert!(!recipe.contains("COLLECT("));
        assert!(!recipe.contains('\\'));
        assert!(recipe.contains(&format!(
            "(r'{}', 'constants')",
            forward_slashes(&inputs.resource)
        )));
    }

    #[test]
    fn macos_recipe_collects_into_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let (settings, inputs) = fixture(tmp.path());

        let recipe = render_recipe(RecipeKind::MacOsBundle, &settings, &inputs).unwrap();

        assert!(recipe.contains("exclude_binaries=True,"));
        assert!(recipe.contains("coll = COLLECT("));
        assert!(recipe.contains("name='GenerationTwo.app',"));
        assert!(recipe.contains("bundle_identifier='com.worldquant.generationtwo',"));
        assert!(recipe.contains(&format!(
            "pathex=[r'{}'],",
            forward_slashes(settings.layout().project_root())
        )));
    }

    #[test]
    fn hidden_imports_follow_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let (settings, inputs) = fixture(tmp.path());
        let mut package = settings.package().clone();
        package.hidden_imports = vec!["only.this".into()];
        let settings = SettingsBuilder::new()
            .layout(settings.layout().clone())
            .host(HostPlatform::Linux)
            .package_settings(package)
            .build()
            .unwrap();

        let recipe = render_recipe(RecipeKind::WindowsOneFile, &settings, &inputs).unwrap();
        assert!(recipe.contains("hiddenimports=[\n        'only.this',\n    ],"));
    }

    #[tokio::test]
    async fn recipe_is_written_to_project_root_and_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        let (settings, inputs) = fixture(tmp.path());
        let stale = tmp.path().join("generation_two_macos.spec");
        std::fs::write(&stale, "stale").unwrap();

        let path = write_recipe(RecipeKind::MacOsBundle, &settings, &inputs)
            .await
            .unwrap();

        assert_eq!(path, stale);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# -*- mode: python ; coding: utf-8 -*-"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn recipe_names_follow_stem() {
        assert_eq!(RecipeKind::WindowsOneFile.file_name("generation_two"), "generation_two.spec");
        assert_eq!(RecipeKind::MacOsBundle.file_name("generation_two"), "generation_two_macos.spec");
    }
}
