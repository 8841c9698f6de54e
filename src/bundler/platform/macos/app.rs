//! `.app` bundle creation with PyInstaller.

use crate::bundler::{
    builder::tool_detection::ensure_pyinstaller,
    error::{Error, ErrorExt, Result},
    freeze::run_freezer,
    paths::ResolvedInputs,
    recipe::{RecipeKind, write_recipe},
    report::Reporter,
    settings::Settings,
    utils::fs,
};
use std::path::PathBuf;

/// Freezes the application into `<project_root>/dist/<bundle>.app`.
pub async fn build_app(
    settings: &Settings,
    inputs: &ResolvedInputs,
    out: &dyn Reporter,
) -> Result<PathBuf> {
    ensure_pyinstaller(settings, out).await?;

    out.success(&format!("Found constants file: {}", inputs.resource.display()));
    out.indent(&format!("GUI script: {}", inputs.entry_point.display()));
    out.indent(&format!("Constants: {}", inputs.resource.display()));
    out.indent(&format!("Project root: {}", settings.layout().project_root().display()));

    let recipe = write_recipe(RecipeKind::MacOsBundle, settings, inputs).await?;
    out.success(&format!("Created spec file: {}", recipe.display()));

    let stale = settings
        .layout()
        .project_dist()
        .join(&settings.macos().bundle_name);
    if stale.exists() {
        out.progress(&format!("Cleaning existing app bundle: {}", stale.display()));
        fs::remove_dir_all(&stale).await?;
    }

    out.success(&format!("Building with spec file: {}", recipe.display()));
    run_freezer(settings, &recipe, true, out).await?;

    normalize_app_bundle(settings, out).await
}

/// Returns the path of a valid `.app` bundle in `<project_root>/dist`.
///
/// `<name>.app` with a `Contents/` directory is used as is. Otherwise a bare
/// `<name>` directory with `Contents/` is renamed to `<name>.app`, replacing
/// any stale bundle.
///
/// # Errors
///
/// [`Error::InvalidAppBundle`] when a candidate lacks `Contents/`,
/// [`Error::ResourceNotFound`] when there is no candidate at all.
pub async fn normalize_app_bundle(settings: &Settings, out: &dyn Reporter) -> Result<PathBuf> {
    let dist = settings.layout().project_dist();
    let macos = settings.macos();
    let app_path = dist.join(macos.app_file_name());
    let bare_path = dist.join(&macos.bundle_name);

    if app_path.join("Contents").is_dir() {
        out.success(&format!("Found app bundle: {}", app_path.display()));
        return Ok(app_path);
    }

    if bare_path.is_dir() {
        if !bare_path.join("Contents").is_dir() {
            out.error(&format!(
                "{} directory exists but is not a valid app bundle",
                macos.bundle_name
            ));
            out.indent("Expected Contents/ directory inside");
            return Err(Error::InvalidAppBundle(bare_path));
        }

        out.success("Found app bundle directory, renaming to .app extension...");
        if app_path.is_dir() {
            fs::remove_dir_all(&app_path).await?;
        } else {
            fs::remove_file(&app_path).await?;
        }
        tokio::fs::rename(&bare_path, &app_path)
            .await
            .fs_context("renaming app bundle", &bare_path)?;
        out.success(&format!("Renamed to: {}", app_path.display()));
        return Ok(app_path);
    }

    if app_path.is_dir() {
        return Err(Error::InvalidAppBundle(app_path));
    }

    out.error(&format!("App bundle not found: {}", app_path.display()));
    out.indent(&format!("Checking dist directory: {}", dist.display()));
    for line in fs::list_dir(&dist).await {
        out.indent(&format!("  {line}"));
    }
    Err(Error::ResourceNotFound {
        what: "App bundle",
        searched: vec![app_path, bare_path],
    })
}
