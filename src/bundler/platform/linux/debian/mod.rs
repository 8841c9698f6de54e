//! Debian package (.deb) creation through stdeb.
//!
//! # Process
//!
//! 1. Install the conversion library (tolerant)
//! 2. Build a source distribution from `setup.py` (required)
//! 3. Locate the source archive in `<project_root>/dist`
//! 4. Convert it with the first working [`ConversionStrategy`]
//! 5. Move the first `.deb` found into the script-local `dist` folder,
//!    preferring packages from this conversion over files elsewhere in the
//!    project
//!
//! A missing archive or package stops the build softly after printing what
//! was searched.

pub mod convert;
pub mod sdist;

pub use convert::{ConversionReport, ConversionStrategy, convert_to_deb};

use crate::bundler::{
    builder::tool_detection::pip_install,
    error::Result,
    paths::ResolvedInputs,
    platform::PackageType,
    report::Reporter,
    settings::Settings,
    utils::fs,
};
use std::path::PathBuf;

/// Builds the Debian package.
pub async fn bundle_project(
    settings: &Settings,
    _inputs: &ResolvedInputs,
    out: &dyn Reporter,
) -> Result<Option<PathBuf>> {
    out.section("Building Linux DEB package...");
    log::info!("Building Debian package for {}", settings.product_name());

    out.progress("Installing build dependencies...");
    if !pip_install(settings, &settings.debian().converter_package)
        .run_tolerant(out)
        .await
    {
        log::warn!("{} installation failed", settings.debian().converter_package);
    }

    out.progress("Building source distribution...");
    sdist::build_sdist(settings, out).await?;

    out.progress("Converting to DEB...");
    let dist = settings.layout().project_dist();
    let Some(archive) = sdist::find_sdist(settings)? else {
        out.error(&format!("Source distribution not found in {}", dist.display()));
        print_listing(out, "Files in dist", &dist).await;
        return Ok(None);
    };
    out.success(&format!("Found source distribution: {}", archive.display()));

    // deb_dist must only hold packages from this conversion
    if fs::remove_dir_all(&dist.join("deb_dist")).await? {
        log::debug!("Removed stale deb_dist");
    }

    let report = convert_to_deb(settings, &archive, out).await;
    if report.succeeded().is_none() {
        out.warn("All conversion methods failed, searching for existing DEB files...");
    }

    relocate_package(settings, out).await
}

/// Moves the first `.deb` found into `<script_dir>/dist`.
///
/// Search order:
///
/// 1. `<project_root>/dist/deb_dist`, recursively
/// 2. `<project_root>/dist`, top level only (manual extraction lands here)
/// 3. the whole project root except the final distribution folder
async fn relocate_package(settings: &Settings, out: &dyn Reporter) -> Result<Option<PathBuf>> {
    let layout = settings.layout();
    let extension = PackageType::Deb.extension();
    let dist = layout.project_dist();
    let deb_dist = dist.join("deb_dist");

    let mut found = Vec::new();
    if deb_dist.is_dir() {
        out.progress(&format!("Checking deb_dist directory: {}", deb_dist.display()));
        found = fs::find_files(&deb_dist, extension, &[]).await?;
        if !found.is_empty() {
            out.progress(&format!("Found {} DEB file(s) in deb_dist", found.len()));
        }
    }

    if found.is_empty() {
        found = fs::find_files_shallow(&dist, extension).await?;
        if !found.is_empty() {
            out.progress(&format!("Found {} DEB file(s) in {}", found.len(), dist.display()));
        }
    }

    if found.is_empty() {
        out.progress("Searching entire project for .deb files...");
        found = fs::find_files(layout.project_root(), extension, &[layout.script_dist()]).await?;
    }

    let Some(package) = found.into_iter().next() else {
        out.error("DEB file not found");
        out.indent(&format!("Searched in: {}", deb_dist.display()));
        out.indent(&format!("Then in: {}", dist.display()));
        out.indent(&format!("And recursively in: {}", layout.project_root().display()));
        if deb_dist.is_dir() {
            print_listing(out, "Files in deb_dist", &deb_dist).await;
        }
        if dist.is_dir() {
            print_listing(out, "Files in dist", &dist).await;
        }
        return Ok(None);
    };

    let Some(name) = package.file_name() else {
        return Ok(None);
    };
    let target = layout.script_dist().join(name);
    fs::move_file(&package, &target).await?;
    out.success(&format!("Linux DEB built: {}", target.display()));

    Ok(Some(target))
}

async fn print_listing(out: &dyn Reporter, label: &str, dir: &std::path::Path) {
    out.indent(&format!("{label}:"));
    for line in fs::list_dir(dir).await {
        out.indent(&format!("  {line}"));
    }
}
