//! The release build workflow.
//!
//! Clean, resolve inputs, plan, build, summarize. Every step is awaited in
//! order; a fatal error anywhere aborts the remaining steps.

use crate::bundler::{
    BuildPlan, BundledArtifact, Bundler, FileConfig, HostPlatform, PackageType, ProjectLayout,
    SettingsBuilder, clean_output_dirs, resolve_inputs,
};
use crate::cli::{Args, OutputManager, RuntimeConfig};
use crate::error::Result;
use anyhow::Context as _;

/// Runs the whole workflow and returns the process exit code.
pub async fn execute(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let out = config.output();

    let script_dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("reading current directory")?,
    };
    let layout = ProjectLayout::from_script_dir(&script_dir)?;
    let file_config = FileConfig::discover(args.config.as_deref(), layout.script_dir()).await?;

    let mut builder = SettingsBuilder::new().layout(layout).config(file_config);
    if let Some(python) = &args.python {
        builder = builder.python(python);
    }
    if let Some(id) = &args.host_platform {
        builder = builder.host(HostPlatform::from_identifier(id));
    }
    let settings = builder.build()?;

    out.progress(&format!("{} Build Script", settings.product_name()));
    out.progress(&"=".repeat(60));
    out.progress(&format!("Script directory: {}", settings.layout().script_dir().display()));
    out.progress(&format!("Project root: {}", settings.layout().project_root().display()));
    out.verbose(&format!("Python interpreter: {}", settings.tools().python().display()));

    clean_output_dirs(settings.layout(), out).await?;

    let inputs = resolve_inputs(&settings, out).await?;

    let plan = BuildPlan::new(settings.host(), args.request());
    if PackageType::for_host(settings.host()).is_none() {
        print_unknown_host_hint(settings.host(), out);
    }
    log::debug!("Build plan: {:?}", plan.steps());

    let bundler = Bundler::new(settings, inputs);
    let artifacts = bundler.bundle_types(plan.steps(), out).await?;

    out.section("Build complete!");
    print_summary(&artifacts, out);

    Ok(0)
}

fn print_unknown_host_hint(host: &HostPlatform, out: &OutputManager) {
    out.warn(&format!("Unknown platform: {host}"));
    out.progress("Available build options:");
    for package_type in PackageType::ALL {
        out.indent(&format!(
            "- {}: {} {}",
            package_type.platform(),
            env!("CARGO_PKG_NAME"),
            package_type.flag()
        ));
    }
}

/// Prints each artifact once; a path built twice keeps its last checksum.
fn print_summary(artifacts: &[BundledArtifact], out: &OutputManager) {
    let mut latest: Vec<&BundledArtifact> = Vec::new();
    for artifact in artifacts {
        latest.retain(|seen| seen.path != artifact.path);
        latest.push(artifact);
    }

    if latest.is_empty() {
        out.progress("No artifacts were produced");
        return;
    }

    for artifact in latest {
        out.success(&format!("{}: {}", artifact.package_type, artifact.path.display()));
        out.indent(&format!("Size: {} bytes", artifact.size));
        out.indent(&format!("SHA256: {}", artifact.checksum));
    }
}
