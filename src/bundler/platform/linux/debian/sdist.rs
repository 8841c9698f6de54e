//! Source distribution step.
//!
//! stdeb needs `setup.py` at the root of the distribution, so the script's
//! copy is staged into the project root for the duration of `sdist` and
//! removed afterwards unless one was already there.

use crate::bundler::{
    command::ToolCommand,
    error::{Error, Result},
    report::Reporter,
    settings::Settings,
    utils::fs,
};
use std::path::PathBuf;

const SETUP_SCRIPT: &str = "setup.py";

/// `setup.py` in the project root, remembering whether it was copied there.
#[derive(Debug)]
pub struct StagedSetupScript {
    path: PathBuf,
    temporary: bool,
}

impl StagedSetupScript {
    /// Location of the staged script.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Removes the script if it was copied in by [`stage_setup_script`].
    pub async fn cleanup(self, out: &dyn Reporter) -> Result<()> {
        if self.temporary && self.path.exists() {
            fs::remove_file(&self.path).await?;
            out.success("Cleaned up temporary setup.py from project root");
        }
        Ok(())
    }
}

/// Makes `<project_root>/setup.py` available.
///
/// # Errors
///
/// [`Error::ResourceNotFound`] when the script directory has no `setup.py`.
pub async fn stage_setup_script(settings: &Settings, out: &dyn Reporter) -> Result<StagedSetupScript> {
    let layout = settings.layout();
    let source = layout.script_dir().join(SETUP_SCRIPT);
    if !source.is_file() {
        return Err(Error::ResourceNotFound {
            what: "setup.py",
            searched: vec![source],
        });
    }

    let path = layout.project_root().join(SETUP_SCRIPT);
    if path.exists() {
        log::debug!("Using existing {}", path.display());
        return Ok(StagedSetupScript {
            path,
            temporary: false,
        });
    }

    fs::copy_file(&source, &path).await?;
    out.success("Copied setup.py to project root for source distribution");
    Ok(StagedSetupScript {
        path,
        temporary: true,
    })
}

/// Runs `python setup.py sdist` in the project root.
///
/// The staged script is removed whether or not the build succeeded. A failed
/// build is fatal.
pub async fn build_sdist(settings: &Settings, out: &dyn Reporter) -> Result<()> {
    let staged = stage_setup_script(settings, out).await?;

    let result = ToolCommand::new(settings.tools().python())
        .arg(staged.path())
        .arg("sdist")
        .current_dir(settings.layout().project_root())
        .run(out)
        .await;

    if let Err(e) = staged.cleanup(out).await {
        out.warn(&format!("Could not remove temporary setup.py: {e}"));
    }

    result
}

/// Finds the source archive in `<project_root>/dist`.
///
/// Patterns are tried in configured order; within a pattern the
/// lexicographically first match wins.
pub fn find_sdist(settings: &Settings) -> Result<Option<PathBuf>> {
    let dist = settings.layout().project_dist();
    let prefix = glob::Pattern::escape(&dist.to_string_lossy());

    for pattern in &settings.debian().sdist_patterns {
        let mut matches: Vec<PathBuf> = glob::glob(&format!("{prefix}/{pattern}"))?
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        matches.sort();
        if let Some(first) = matches.into_iter().next() {
            return Ok(Some(first));
        }
    }

    Ok(None)
}
