//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the planned
//! platform builds one after another and records what they produced.

use crate::bundler::{
    Result,
    error::ErrorExt,
    paths::ResolvedInputs,
    platform::{self, PackageType},
    report::Reporter,
    settings::Settings,
};
use std::path::PathBuf;

use super::checksum::calculate_sha256;

/// A relocated release artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundledArtifact {
    /// Kind of package.
    pub package_type: PackageType,
    /// Final location under `<script_dir>/dist`.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the file.
    pub checksum: String,
}

/// Main bundler orchestrator.
///
/// Holds the settings and the inputs resolved before any build ran, and
/// delegates each package type to its platform module.
///
/// # Examples
///
/// ```no_run
/// use generation_two_bundler::bundler::{Bundler, PackageType, Settings, resolve_inputs};
/// use generation_two_bundler::cli::OutputManager;
///
/// # async fn example(settings: Settings) -> generation_two_bundler::bundler::Result<()> {
/// let out = OutputManager::default();
/// let inputs = resolve_inputs(&settings, &out).await?;
/// let bundler = Bundler::new(settings, inputs);
///
/// for artifact in bundler.bundle_types(&[PackageType::Deb], &out).await? {
///     println!("{} ({} bytes) {}", artifact.path.display(), artifact.size, artifact.checksum);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    inputs: ResolvedInputs,
}

impl Bundler {
    /// Creates a bundler for already resolved inputs.
    pub fn new(settings: Settings, inputs: ResolvedInputs) -> Self {
        Self { settings, inputs }
    }

    /// Runs the builds for `types` in order.
    ///
    /// Soft failures (an artifact that was not produced) are skipped; the
    /// first fatal error stops the remaining builds.
    pub async fn bundle_types(
        &self,
        types: &[PackageType],
        out: &dyn Reporter,
    ) -> Result<Vec<BundledArtifact>> {
        let mut artifacts = Vec::new();

        for package_type in types {
            log::debug!("Starting {} build", package_type);

            let path = match package_type {
                PackageType::Exe => {
                    platform::windows::bundle_project(&self.settings, &self.inputs, out).await?
                }
                PackageType::Deb => {
                    platform::linux::debian::bundle_project(&self.settings, &self.inputs, out)
                        .await?
                }
                PackageType::Dmg => {
                    platform::macos::bundle_project(&self.settings, &self.inputs, out).await?
                }
            };

            let Some(path) = path else {
                log::info!("{} build produced no artifact", package_type);
                continue;
            };

            let size = tokio::fs::metadata(&path)
                .await
                .fs_context("reading artifact metadata", &path)?
                .len();
            let checksum = calculate_sha256(&path).await?;

            artifacts.push(BundledArtifact {
                package_type: *package_type,
                path,
                size,
                checksum,
            });
        }

        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::report::Silent;
    use crate::bundler::{HostPlatform, ProjectLayout, SettingsBuilder};

    #[tokio::test]
    async fn skipped_builds_yield_no_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let script_dir = tmp.path().join("generation_two");
        let settings = SettingsBuilder::new()
            .layout(ProjectLayout::from_script_dir(&script_dir).unwrap())
            .host(HostPlatform::Linux)
            .build()
            .unwrap();
        let inputs = ResolvedInputs {
            entry_point: script_dir.join("gui/run_gui.py"),
            resource: script_dir.join("constants/operatorRAW.json"),
        };

        let bundler = Bundler::new(settings, inputs);
        let artifacts = bundler
            .bundle_types(&[PackageType::Dmg, PackageType::Dmg], &Silent)
            .await
            .unwrap();

        assert!(artifacts.is_empty());
    }

    #[cfg(unix)]
    fn fake_tool(path: &std::path::Path, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, format!("#!/bin/sh\n{script}")).unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn repeated_builds_leave_one_artifact_per_platform() {
        use PackageType::{Deb, Exe};

        let tmp = tempfile::tempdir().unwrap();
        let script_dir = tmp.path().join("generation_two");
        std::fs::create_dir_all(&script_dir).unwrap();
        std::fs::write(script_dir.join("setup.py"), "from setuptools import setup\nsetup()\n").unwrap();

        let bin = tmp.path().join("bin");
        fake_tool(
            &bin.join("py2dsc-deb"),
            "mkdir -p deb_dist/pkg && touch deb_dist/pkg/python3-generation-two_1.0.0-1_all.deb\n",
        );
        let python = tmp.path().join("fake-python");
        fake_tool(
            &python,
            "case \"$1\" in\n\
             -c) exit 0 ;;\n\
             -m)\n\
               case \"$2\" in\n\
               pip) exit 0 ;;\n\
               PyInstaller) mkdir -p dist && printf MZ > dist/generation-two.exe ;;\n\
               *) exit 1 ;;\n\
               esac ;;\n\
             *)\n\
               [ \"$2\" = \"sdist\" ] || exit 1\n\
               mkdir -p dist && printf sdist > dist/generation_two-1.0.0.tar.gz ;;\n\
             esac\n",
        );

        let settings = SettingsBuilder::new()
            .layout(ProjectLayout::from_script_dir(&script_dir).unwrap())
            .host(HostPlatform::Linux)
            .python(python)
            .search_path(bin)
            .build()
            .unwrap();
        let inputs = ResolvedInputs {
            entry_point: script_dir.join("gui/run_gui.py"),
            resource: script_dir.join("constants/operatorRAW.json"),
        };

        let artifacts = Bundler::new(settings, inputs)
            .bundle_types(&[Deb, Exe, Deb, Exe], &Silent)
            .await
            .unwrap();

        let types: Vec<_> = artifacts.iter().map(|a| a.package_type).collect();
        assert_eq!(types, [Deb, Exe, Deb, Exe]);
        assert_eq!(artifacts[0].path, artifacts[2].path);
        assert_eq!(artifacts[1].path, artifacts[3].path);
        assert_eq!(artifacts[1].size, 2);

        let mut dist: Vec<String> = std::fs::read_dir(script_dir.join("dist"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        dist.sort();
        assert_eq!(dist, ["generation-two.exe", "python3-generation-two_1.0.0-1_all.deb"]);
        assert!(!tmp.path().join("setup.py").exists());
    }
}
