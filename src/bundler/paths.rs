//! Project layout and input resolution.
//!
//! The bundler runs from the application's own directory (the script
//! directory); the project root is its parent. Two inputs are located before
//! anything is built: the GUI entry point and the JSON resource, the latter
//! with a fallback to the project root.

use crate::bundler::{
    error::{Error, Result},
    report::Reporter,
    settings::Settings,
    utils::fs,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Script directory and project root, both absolute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLayout {
    script_dir: PathBuf,
    project_root: PathBuf,
}

impl ProjectLayout {
    /// Derives the layout from the script directory.
    ///
    /// The path is made absolute against the current directory; it does not
    /// need to exist yet.
    pub fn from_script_dir(script_dir: impl AsRef<Path>) -> Result<Self> {
        let script_dir = script_dir
            .as_ref()
            .absolutize()
            .map_err(|e| Error::Fs {
                context: "resolving script directory",
                path: script_dir.as_ref().to_path_buf(),
                error: e,
            })?
            .into_owned();

        let project_root = script_dir
            .parent()
            .ok_or_else(|| {
                Error::GenericError(format!(
                    "script directory {} has no parent directory",
                    script_dir.display()
                ))
            })?
            .to_path_buf();

        Ok(Self {
            script_dir,
            project_root,
        })
    }

    /// Directory holding the bundler inputs (`gui/`, `constants/`, `setup.py`).
    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }

    /// Parent of the script directory; working directory of every tool.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Final distribution folder, `<script_dir>/dist`.
    pub fn script_dist(&self) -> PathBuf {
        self.script_dir.join("dist")
    }

    /// Tool-owned output folder, `<project_root>/dist`.
    pub fn project_dist(&self) -> PathBuf {
        self.project_root.join("dist")
    }

    /// Output directories removed before every run.
    pub fn stale_output_dirs(&self) -> [PathBuf; 4] {
        [
            self.script_dir.join("dist"),
            self.project_root.join("dist"),
            self.script_dir.join("build"),
            self.project_root.join("build"),
        ]
    }
}

/// Located application inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedInputs {
    /// GUI entry-point script.
    pub entry_point: PathBuf,
    /// JSON resource file, always at its primary location.
    pub resource: PathBuf,
}

/// Locates the entry point and resource file.
///
/// The resource is looked up under the script directory first. When it only
/// exists under the project root it is copied to the script directory so the
/// recipe always references the primary location.
///
/// # Errors
///
/// [`Error::ResourceNotFound`] if the resource is in neither location or the
/// entry point is missing.
pub async fn resolve_inputs(settings: &Settings, out: &dyn Reporter) -> Result<ResolvedInputs> {
    let layout = settings.layout();
    let package = settings.package();

    let entry_point = layout.script_dir().join(&package.entry_point);
    let resource = layout.script_dir().join(&package.resource);

    if !resource.is_file() {
        let root_resource = layout.project_root().join(&package.resource);
        if root_resource.is_file() {
            fs::copy_file(&root_resource, &resource).await?;
            out.success(&format!(
                "Copied constants file from root: {} -> {}",
                root_resource.display(),
                resource.display()
            ));
        } else {
            out.error(&format!("Constants file not found: {}", resource.display()));
            out.indent(&format!("Also checked: {}", root_resource.display()));
            return Err(Error::ResourceNotFound {
                what: "Constants file",
                searched: vec![resource, root_resource],
            });
        }
    }

    if !entry_point.is_file() {
        return Err(Error::ResourceNotFound {
            what: "GUI script",
            searched: vec![entry_point],
        });
    }

    log::debug!(
        "resolved inputs: entry point {}, resource {}",
        entry_point.display(),
        resource.display()
    );

    Ok(ResolvedInputs {
        entry_point,
        resource,
    })
}
