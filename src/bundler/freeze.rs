//! Freezing-tool invocation.

use crate::bundler::{command::ToolCommand, error::Result, report::Reporter, settings::Settings};
use std::path::Path;

/// Runs `python -m PyInstaller --clean [-y] <recipe>` in the project root.
///
/// `overwrite` adds `-y` so PyInstaller replaces an existing output
/// directory without prompting. A failing build is fatal.
pub async fn run_freezer(
    settings: &Settings,
    recipe: &Path,
    overwrite: bool,
    out: &dyn Reporter,
) -> Result<()> {
    let mut command = ToolCommand::new(settings.tools().python())
        .args(["-m", "PyInstaller", "--clean"])
        .current_dir(settings.layout().project_root());
    if overwrite {
        command = command.arg("-y");
    }

    command.arg(recipe).run(out).await
}
