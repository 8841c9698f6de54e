//! External tool detection and availability checking.
//!
//! Command-line tools are located with `which`; Python tools are probed by
//! importing them with the configured interpreter and installed with pip
//! when missing.

use crate::bundler::{
    command::ToolCommand,
    error::{Error, Result},
    report::Reporter,
    settings::Settings,
};
use std::path::PathBuf;

/// Locates a command-line tool on the configured search path.
pub fn find_tool(settings: &Settings, name: &str) -> Option<PathBuf> {
    let found = match settings.tools().search_path() {
        Some(paths) => which::which_in(name, Some(paths), settings.layout().project_root()),
        None => which::which(name),
    };

    match found {
        Ok(path) => {
            log::debug!("Found {} at: {}", name, path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", name, e);
            None
        }
    }
}

/// Returns true if `module` can be imported by the configured interpreter.
pub async fn python_module_available(settings: &Settings, module: &str) -> bool {
    ToolCommand::new(settings.tools().python())
        .arg("-c")
        .arg(format!("import {module}"))
        .probe()
        .await
}

/// Makes sure PyInstaller can be imported, installing it with pip if allowed.
///
/// # Errors
///
/// [`Error::ToolMissing`] when it is absent and installation is disabled, or
/// the pip error when installation fails.
pub async fn ensure_pyinstaller(settings: &Settings, out: &dyn Reporter) -> Result<()> {
    if python_module_available(settings, "PyInstaller").await {
        log::debug!("PyInstaller already available");
        return Ok(());
    }

    if !settings.tools().install_missing_tools() {
        return Err(Error::ToolMissing("PyInstaller".into()));
    }

    out.progress("Installing PyInstaller...");
    pip_install(settings, "pyinstaller").run(out).await
}

/// Builds `python -m pip install <package>`.
pub fn pip_install(settings: &Settings, package: &str) -> ToolCommand {
    ToolCommand::new(settings.tools().python()).args(["-m", "pip", "install", package])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::report::Silent;
    use crate::bundler::{HostPlatform, ProjectLayout, SettingsBuilder};

    fn settings_with(tmp: &std::path::Path, install: bool) -> Settings {
        SettingsBuilder::new()
            .layout(ProjectLayout::from_script_dir(tmp.join("generation_two")).unwrap())
            .host(HostPlatform::Linux)
            .python(tmp.join("missing-python"))
            .install_missing_tools(install)
            .search_path(tmp.join("empty-bin"))
            .build()
            .unwrap()
    }

    #[test]
    fn tool_lookup_honours_search_path() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("empty-bin")).unwrap();
        let settings = settings_with(tmp.path(), true);
        assert!(find_tool(&settings, "py2dsc-deb").is_none());
    }

    #[tokio::test]
    async fn missing_interpreter_means_module_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings_with(tmp.path(), true);
        assert!(!python_module_available(&settings, "PyInstaller").await);
    }

    #[tokio::test]
    async fn disabled_installation_reports_missing_tool() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings_with(tmp.path(), false);
        let err = ensure_pyinstaller(&settings, &Silent)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolMissing(name) if name == "PyInstaller"));
    }

    #[tokio::test]
    async fn failed_installation_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings_with(tmp.path(), true);
        let err = ensure_pyinstaller(&settings, &Silent)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }));
    }
}
