//! Disk image creation with `create-dmg`.

use crate::bundler::{
    builder::tool_detection::find_tool,
    command::ToolCommand,
    error::Result,
    report::Reporter,
    settings::Settings,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Wraps `app` into `<script_dir>/dist/<bundle>.dmg`.
///
/// `create-dmg` failures are tolerated: the app bundle location is reported
/// and `Ok(None)` returned.
pub async fn create_disk_image(
    settings: &Settings,
    app: &Path,
    out: &dyn Reporter,
) -> Result<Option<PathBuf>> {
    out.progress("Creating DMG...");

    let script_dist = settings.layout().script_dist();
    let dmg_path = script_dist.join(settings.macos().dmg_file_name());
    fs::create_dir_all(&script_dist, false).await?;
    fs::remove_file(&dmg_path).await?;

    let created = match find_tool(settings, "create-dmg") {
        Some(program) => {
            create_dmg_command(settings, &program, &dmg_path, app)
                .run_tolerant(out)
                .await
        }
        None => {
            out.indent("create-dmg not found in PATH (brew install create-dmg)");
            false
        }
    };

    if created && dmg_path.is_file() {
        out.success(&format!("macOS DMG built: {}", dmg_path.display()));
        return Ok(Some(dmg_path));
    }

    out.warn(&format!(
        "DMG creation may have failed, but app bundle is available at: {}",
        app.display()
    ));
    out.indent("You can manually create a DMG or distribute the .app bundle directly");
    Ok(None)
}

fn create_dmg_command(settings: &Settings, program: &Path, dmg_path: &Path, app: &Path) -> ToolCommand {
    let dmg = settings.dmg();

    ToolCommand::new(program)
        .arg("--volname")
        .arg(&dmg.volume_name)
        .arg("--window-pos")
        .args([dmg.window_position.0.to_string(), dmg.window_position.1.to_string()])
        .arg("--window-size")
        .args([dmg.window_size.0.to_string(), dmg.window_size.1.to_string()])
        .arg("--icon-size")
        .arg(dmg.icon_size.to_string())
        .arg("--app-drop-link")
        .args([dmg.app_drop_link.0.to_string(), dmg.app_drop_link.1.to_string()])
        .arg(dmg_path)
        .arg(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::report::Silent;
    use crate::bundler::{HostPlatform, ProjectLayout, SettingsBuilder};

    fn settings(tmp: &Path) -> Settings {
        let bin = tmp.join("empty-bin");
        std::fs::create_dir_all(&bin).unwrap();
        SettingsBuilder::new()
            .layout(ProjectLayout::from_script_dir(tmp.join("generation_two")).unwrap())
            .host(HostPlatform::MacOs)
            .search_path(bin)
            .build()
            .unwrap()
    }

    #[test]
    fn command_uses_configured_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let command = create_dmg_command(
            &settings(tmp.path()),
            Path::new("create-dmg"),
            Path::new("/out/GenerationTwo.dmg"),
            Path::new("/build/GenerationTwo.app"),
        );
        assert_eq!(
            command.display(),
            "create-dmg --volname Generation Two --window-pos 200 120 --window-size 800 400 \
             --icon-size 100 --app-drop-link 600 185 /out/GenerationTwo.dmg /build/GenerationTwo.app"
        );
    }

    #[tokio::test]
    async fn failed_image_keeps_app_and_is_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings(tmp.path());
        let app = tmp.path().join("dist/GenerationTwo.app");
        std::fs::create_dir_all(app.join("Contents")).unwrap();
        std::fs::create_dir_all(settings.layout().script_dist()).unwrap();
        std::fs::write(settings.layout().script_dist().join("GenerationTwo.dmg"), "stale").unwrap();

        let result = create_disk_image(&settings, &app, &Silent)
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(!settings.layout().script_dist().join("GenerationTwo.dmg").exists());
        assert!(app.join("Contents").is_dir());
    }
}
