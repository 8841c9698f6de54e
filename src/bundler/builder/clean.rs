//! Output directory cleanup.

use crate::bundler::{Result, paths::ProjectLayout, report::Reporter, utils::fs};

/// Removes every stale output directory, then recreates `<script_dir>/dist`.
///
/// Nothing from a previous run survives: `dist` and `build` are removed under
/// both the script directory and the project root.
pub async fn clean_output_dirs(layout: &ProjectLayout, out: &dyn Reporter) -> Result<()> {
    for dir in layout.stale_output_dirs() {
        if dir.exists() {
            out.progress(&format!("Cleaning: {}", dir.display()));
            fs::remove_dir_all(&dir).await?;
        }
    }

    fs::create_dir_all(&layout.script_dist(), false).await
}
