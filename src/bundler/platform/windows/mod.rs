//! Windows single-file executable.
//!
//! Freezes the GUI entry point into `generation-two.exe` and moves it from
//! the tool-owned `<project_root>/dist` into the script-local `dist` folder.

use crate::bundler::{
    builder::tool_detection::ensure_pyinstaller,
    error::Result,
    freeze::run_freezer,
    paths::ResolvedInputs,
    recipe::{RecipeKind, write_recipe},
    report::Reporter,
    settings::Settings,
    utils::fs,
};
use std::path::PathBuf;

/// Builds the Windows executable.
///
/// Returns `Ok(None)` when PyInstaller finished but the executable is not
/// where it was expected; the contents of the output folder are listed.
pub async fn bundle_project(
    settings: &Settings,
    inputs: &ResolvedInputs,
    out: &dyn Reporter,
) -> Result<Option<PathBuf>> {
    out.section("Building Windows EXE...");
    log::info!("Building Windows executable for {}", settings.product_name());
    out.indent(&format!("GUI script: {}", inputs.entry_point.display()));
    out.indent(&format!("Constants file: {}", inputs.resource.display()));

    ensure_pyinstaller(settings, out).await?;

    let recipe = write_recipe(RecipeKind::WindowsOneFile, settings, inputs).await?;
    out.success(&format!("Created spec file: {}", recipe.display()));

    run_freezer(settings, &recipe, false, out).await?;

    relocate_executable(settings, out).await
}

async fn relocate_executable(settings: &Settings, out: &dyn Reporter) -> Result<Option<PathBuf>> {
    let file_name = settings.windows().executable_file_name();
    let built = settings.layout().project_dist().join(&file_name);

    if !built.is_file() {
        out.error(&format!("EXE not found at expected location: {}", built.display()));
        out.indent(&format!("Contents of {}:", settings.layout().project_dist().display()));
        for line in fs::list_dir(&settings.layout().project_dist()).await {
            out.indent(&format!("  {line}"));
        }
        return Ok(None);
    }

    let target = settings.layout().script_dist().join(&file_name);
    fs::move_file(&built, &target).await?;
    out.success(&format!("EXE created: {}", target.display()));

    Ok(Some(target))
}
