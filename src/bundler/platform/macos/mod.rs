//! macOS application bundle and disk image.
//!
//! The `.app` is produced by PyInstaller from the split macOS recipe, then
//! wrapped into a drag-to-install DMG by `create-dmg`. Only a macOS host can
//! run either step; elsewhere the build is skipped before anything is
//! written.

pub mod app;
pub mod dmg;

use crate::bundler::{error::Result, paths::ResolvedInputs, report::Reporter, settings::Settings};
use std::path::PathBuf;

/// Builds the app bundle and the DMG.
///
/// Returns `Ok(None)` on a non-macOS host or when `create-dmg` did not
/// produce an image; the app bundle is kept either way.
pub async fn bundle_project(
    settings: &Settings,
    inputs: &ResolvedInputs,
    out: &dyn Reporter,
) -> Result<Option<PathBuf>> {
    out.section("Building macOS DMG...");

    if !settings.host().is_macos() {
        out.warn("DMG can only be built on macOS");
        return Ok(None);
    }

    log::info!("Creating DMG for {}", settings.product_name());

    let app_path = app::build_app(settings, inputs, out).await?;
    dmg::create_disk_image(settings, &app_path, out).await
}
