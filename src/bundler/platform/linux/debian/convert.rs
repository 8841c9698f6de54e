//! Source distribution to `.deb` conversion.
//!
//! Three strategies are tried in order and the first success wins. Each
//! failure is reported as a warning and the next strategy runs; when all of
//! them fail the caller still searches for a package left by an earlier run.

use crate::{
    bail,
    bundler::{
        builder::tool_detection::find_tool,
        command::ToolCommand,
        error::{Error, Result},
        platform::PackageType,
        report::Reporter,
        settings::Settings,
        utils::fs,
    },
};
use std::path::{Path, PathBuf};

/// Ways to turn a source archive into a Debian package.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionStrategy {
    /// The `py2dsc-deb` command.
    CommandLine,
    /// `python -m stdeb.command.py2dsc_deb`.
    LibraryModule,
    /// Extract the archive and run `bdist_deb` inside it.
    ManualExtraction,
}

impl ConversionStrategy {
    /// Strategies in the order they are tried.
    pub const ORDER: [ConversionStrategy; 3] = [
        ConversionStrategy::CommandLine,
        ConversionStrategy::LibraryModule,
        ConversionStrategy::ManualExtraction,
    ];
}

/// What happened to one strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    /// The strategy could not run at all (tool not on the search path).
    Unavailable,
}

/// Per-strategy outcomes of one conversion.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub outcomes: Vec<(ConversionStrategy, Outcome)>,
}

impl ConversionReport {
    /// The strategy that produced the package, if any.
    pub fn succeeded(&self) -> Option<ConversionStrategy> {
        self.outcomes
            .iter()
            .find(|(_, outcome)| *outcome == Outcome::Succeeded)
            .map(|(strategy, _)| *strategy)
    }
}

/// Converts `archive` (inside `<project_root>/dist`) to a Debian package.
///
/// Never fails: every error is reported and recorded in the returned report.
pub async fn convert_to_deb(settings: &Settings, archive: &Path, out: &dyn Reporter) -> ConversionReport {
    let mut report = ConversionReport::default();

    for strategy in ConversionStrategy::ORDER {
        let outcome = attempt(strategy, settings, archive, out).await;
        log::debug!("{:?} conversion: {:?}", strategy, outcome);
        report.outcomes.push((strategy, outcome));
        if outcome == Outcome::Succeeded {
            break;
        }
    }

    report
}

async fn attempt(
    strategy: ConversionStrategy,
    settings: &Settings,
    archive: &Path,
    out: &dyn Reporter,
) -> Outcome {
    let debian = settings.debian();
    let dist = settings.layout().project_dist();
    let archive_name = archive.file_name().map(|n| n.to_os_string()).unwrap_or_default();

    match strategy {
        ConversionStrategy::CommandLine => {
            let Some(converter) = find_tool(settings, &debian.converter) else {
                out.warn(&format!("{} not in PATH, trying Python module...", debian.converter));
                return Outcome::Unavailable;
            };
            out.progress(&format!("Trying {} command...", debian.converter));
            let ok = ToolCommand::new(converter)
                .arg(&archive_name)
                .current_dir(&dist)
                .run_tolerant(out)
                .await;
            if ok {
                Outcome::Succeeded
            } else {
                out.warn(&format!("{} command failed, trying fallback methods...", debian.converter));
                Outcome::Failed
            }
        }
        ConversionStrategy::LibraryModule => {
            let ok = ToolCommand::new(settings.tools().python())
                .args(["-m", debian.converter_module.as_str()])
                .arg(&archive_name)
                .current_dir(&dist)
                .run_tolerant(out)
                .await;
            if ok {
                Outcome::Succeeded
            } else {
                out.warn("Module approach failed");
                out.indent("Trying manual extraction...");
                Outcome::Failed
            }
        }
        ConversionStrategy::ManualExtraction => match manual_extraction(settings, archive, out).await {
            Ok(()) => Outcome::Succeeded,
            Err(e) => {
                out.warn(&format!("Manual extraction failed: {e}"));
                Outcome::Failed
            }
        },
    }
}

/// Extracts the archive into a scratch directory, runs `bdist_deb` in the
/// unpacked package and moves the resulting packages into
/// `<project_root>/dist`.
async fn manual_extraction(settings: &Settings, archive: &Path, out: &dyn Reporter) -> Result<()> {
    let scratch = tempfile::tempdir()?;
    extract_archive(archive, scratch.path()).await?;

    let package_dir = find_package_dir(scratch.path())
        .await?
        .ok_or_else(|| Error::GenericError("Could not find setup.py in extracted archive".into()))?;
    out.indent(&format!("Building DEB from: {}", package_dir.display()));

    ToolCommand::new(settings.tools().python())
        .args(["setup.py", "--command-packages=stdeb.command", "bdist_deb"])
        .current_dir(&package_dir)
        .run(out)
        .await?;

    let deb_dist = package_dir.join("deb_dist");
    if !deb_dist.is_dir() {
        bail!("deb_dist not found in {}", package_dir.display());
    }

    let packages = fs::find_files(&deb_dist, PackageType::Deb.extension(), &[]).await?;
    if packages.is_empty() {
        bail!("no .deb produced in {}", deb_dist.display());
    }

    let dist = settings.layout().project_dist();
    for package in packages {
        let Some(name) = package.file_name() else { continue };
        let target = dist.join(name);
        fs::move_file(&package, &target).await?;
        out.indent(&format!("[OK] Moved DEB: {}", target.display()));
    }

    Ok(())
}

async fn extract_archive(archive: &Path, into: &Path) -> Result<()> {
    let archive = archive.to_path_buf();
    let into = into.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let file = std::fs::File::open(&archive).map_err(|error| Error::Fs {
            context: "opening source archive",
            path: archive.clone(),
            error,
        })?;
        let mut tarball = tar::Archive::new(flate2::read::GzDecoder::new(file));
        tarball.unpack(&into).map_err(|error| Error::Fs {
            context: "extracting source archive",
            path: archive,
            error,
        })
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive extraction task panicked: {}", e)))?
}

/// First top-level directory of the extracted tree that holds a `setup.py`.
async fn find_package_dir(root: &Path) -> Result<Option<PathBuf>> {
    let mut candidates = Vec::new();
    let mut entries = tokio::fs::read_dir(root).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_dir() && path.join("setup.py").is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::report::Silent;
    use crate::bundler::{HostPlatform, ProjectLayout, SettingsBuilder};
    use flate2::{Compression, write::GzEncoder};

    fn sdist_archive(dist: &Path) -> PathBuf {
        std::fs::create_dir_all(dist).unwrap();
        let path = dist.join("generation-two-1.0.0.tar.gz");
        let file = std::fs::File::create(&path).unwrap();
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

        let content = b"from setuptools import setup\nsetup()\n";
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, "generation-two-1.0.0/setup.py", &content[..])
            .unwrap();
        builder.into_inner().unwrap().finish().unwrap();
        path
    }

    const PACKAGE: &str = "python3-generation-two_1.0.0-1_all.deb";

    /// Search path used by [`settings`]; empty unless a test adds tools.
    fn bin(tmp: &Path) -> PathBuf {
        tmp.join("bin")
    }

    #[cfg(unix)]
    fn fake_tool(path: &Path, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, format!("#!/bin/sh\n{script}")).unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn settings(tmp: &Path, python: PathBuf) -> Settings {
        let bin = bin(tmp);
        std::fs::create_dir_all(&bin).unwrap();
        SettingsBuilder::new()
            .layout(ProjectLayout::from_script_dir(tmp.join("generation_two")).unwrap())
            .host(HostPlatform::Linux)
            .python(python)
            .search_path(bin)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn every_strategy_is_tried_when_tools_are_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings(tmp.path(), tmp.path().join("missing-python"));
        let archive = sdist_archive(&settings.layout().project_dist());

        let report = convert_to_deb(&settings, &archive, &Silent).await;

        assert_eq!(
            report.outcomes,
            vec![
                (ConversionStrategy::CommandLine, Outcome::Unavailable),
                (ConversionStrategy::LibraryModule, Outcome::Failed),
                (ConversionStrategy::ManualExtraction, Outcome::Failed),
            ]
        );
        assert_eq!(report.succeeded(), None);
    }

    #[tokio::test]
    async fn extraction_finds_package_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = sdist_archive(&tmp.path().join("dist"));
        let scratch = tmp.path().join("scratch");
        std::fs::create_dir_all(&scratch).unwrap();

        extract_archive(&archive, &scratch).await.unwrap();

        assert_eq!(
            find_package_dir(&scratch).await.unwrap(),
            Some(scratch.join("generation-two-1.0.0"))
        );
    }

    #[tokio::test]
    async fn corrupt_archive_fails_extraction() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("broken.tar.gz");
        std::fs::write(&archive, b"not gzip").unwrap();

        let err = extract_archive(&archive, tmp.path()).await.unwrap_err();
        assert!(matches!(err, Error::Fs { context: "extracting source archive", .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn command_line_success_stops_fall_through() {
        let tmp = tempfile::tempdir().unwrap();
        fake_tool(
            &bin(tmp.path()).join("py2dsc-deb"),
            &format!(
                "[ \"$1\" = \"generation-two-1.0.0.tar.gz\" ] || exit 1\n\
                 mkdir -p deb_dist/pkg && touch deb_dist/pkg/{PACKAGE}\n"
            ),
        );
        let settings = settings(tmp.path(), tmp.path().join("missing-python"));
        let archive = sdist_archive(&settings.layout().project_dist());

        let report = convert_to_deb(&settings, &archive, &Silent).await;

        assert_eq!(report.outcomes, vec![(ConversionStrategy::CommandLine, Outcome::Succeeded)]);
        assert!(
            settings
                .layout()
                .project_dist()
                .join("deb_dist/pkg")
                .join(PACKAGE)
                .is_file()
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn module_runs_after_command_line_failure() {
        let tmp = tempfile::tempdir().unwrap();
        fake_tool(&bin(tmp.path()).join("py2dsc-deb"), "exit 1\n");
        let python = tmp.path().join("fake-python");
        fake_tool(
            &python,
            &format!(
                "[ \"$1\" = \"-m\" ] && [ \"$2\" = \"stdeb.command.py2dsc_deb\" ] || exit 1\n\
                 mkdir -p deb_dist/pkg && touch deb_dist/pkg/{PACKAGE}\n"
            ),
        );
        let settings = settings(tmp.path(), python);
        let archive = sdist_archive(&settings.layout().project_dist());

        let report = convert_to_deb(&settings, &archive, &Silent).await;

        assert_eq!(
            report.outcomes,
            vec![
                (ConversionStrategy::CommandLine, Outcome::Failed),
                (ConversionStrategy::LibraryModule, Outcome::Succeeded),
            ]
        );
        assert_eq!(report.succeeded(), Some(ConversionStrategy::LibraryModule));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn manual_extraction_moves_packages_into_dist() {
        let tmp = tempfile::tempdir().unwrap();
        let python = tmp.path().join("fake-python");
        fake_tool(
            &python,
            &format!(
                "if [ \"$1\" = \"-m\" ]; then exit 1; fi\n\
                 mkdir -p deb_dist/pkg && touch deb_dist/pkg/{PACKAGE}\n"
            ),
        );
        let settings = settings(tmp.path(), python);
        let archive = sdist_archive(&settings.layout().project_dist());

        let report = convert_to_deb(&settings, &archive, &Silent).await;

        assert_eq!(report.succeeded(), Some(ConversionStrategy::ManualExtraction));
        assert!(settings.layout().project_dist().join(PACKAGE).is_file());
    }
}
