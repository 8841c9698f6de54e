//! File system utilities for bundling.
//!
//! Provides idempotent directory handling, artifact moves that replace stale
//! copies, recursive artifact search and directory listings for diagnostics.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
///
/// Returns `true` when something was removed.
pub async fn remove_dir_all(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Removes a file if it exists.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Fs {
            context: "removing file",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", from)?;
    Ok(())
}

/// Moves a file to `to`, replacing any file already there.
///
/// Falls back to copy + delete when a rename is not possible, e.g. when the
/// build directory and the distribution folder live on different devices.
pub async fn move_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }

    // rename() refuses to replace an existing file on Windows
    if to.is_file() && from != to {
        remove_file(to).await?;
    }

    match fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::debug!(
                "rename {} -> {} failed ({}), copying instead",
                from.display(),
                to.display(),
                e
            );
            copy_file(from, to).await?;
            fs::remove_file(from)
                .await
                .fs_context("removing moved file", from)
        }
    }
}

/// Recursively collects files under `root` with the given extension.
///
/// Directories listed in `exclude` are not descended into. Results are sorted
/// so the first match is deterministic. Unreadable entries are skipped.
pub async fn find_files(root: &Path, extension: &str, exclude: &[PathBuf]) -> Result<Vec<PathBuf>> {
    walk(root, extension, exclude, usize::MAX).await
}

/// Collects files with the given extension directly inside `dir`.
pub async fn find_files_shallow(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    walk(dir, extension, &[], 1).await
}

async fn walk(
    root: &Path,
    extension: &str,
    exclude: &[PathBuf],
    max_depth: usize,
) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let root = root.to_path_buf();
    let extension = extension.to_ascii_lowercase();
    let exclude = exclude.to_vec();

    tokio::task::spawn_blocking(move || {
        let mut found = Vec::new();
        let walker = walkdir::WalkDir::new(&root)
            .follow_links(false)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| !exclude.iter().any(|ex| entry.path() == ex));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(&extension));
            if matches {
                found.push(entry.into_path());
            }
        }

        found.sort();
        Ok(found)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Artifact search task panicked: {}", e)))?
}

/// Lists directory entries for diagnostics.
///
/// Each entry is rendered as `[DIR]  name` or `[FILE] name (N bytes)`.
/// A missing or unreadable directory yields a single explanatory line.
pub async fn list_dir(path: &Path) -> Vec<String> {
    let mut entries = match fs::read_dir(path).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return vec![format!("{} does not exist", path.display())];
        }
        Err(e) => return vec![format!("[Cannot read directory: {}]", e)],
    };

    let mut items = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let name = entry.file_name().to_string_lossy().into_owned();
        match entry.metadata().await {
            Ok(meta) if meta.is_dir() => items.push(format!("[DIR]  {}", name)),
            Ok(meta) => items.push(format!("[FILE] {} ({} bytes)", name, meta.len())),
            Err(_) => items.push(format!("[?]    {}", name)),
        }
    }
    items.sort();

    if items.is_empty() {
        items.push(format!("{} is empty", path.display()));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn move_file_replaces_existing_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist");

        for content in ["first", "second"] {
            let built = tmp.path().join("build-output.deb");
            std::fs::write(&built, content).unwrap();
            move_file(&built, &dist.join("generation-two.deb")).await.unwrap();
            assert!(!built.exists());
        }

        let entries: Vec<_> = std::fs::read_dir(&dist).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            std::fs::read_to_string(dist.join("generation-two.deb")).unwrap(),
            "second"
        );
    }

    #[tokio::test]
    async fn remove_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("build");
        std::fs::create_dir_all(dir.join("nested")).unwrap();

        assert!(remove_dir_all(&dir).await.unwrap());
        assert!(!remove_dir_all(&dir).await.unwrap());
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn find_files_skips_excluded_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("deb_dist/pkg")).unwrap();
        std::fs::create_dir_all(root.join("gen/dist")).unwrap();
        std::fs::write(root.join("deb_dist/pkg/app_1.0_all.DEB"), b"x").unwrap();
        std::fs::write(root.join("gen/dist/old_1.0_all.deb"), b"x").unwrap();
        std::fs::write(root.join("notes.txt"), b"x").unwrap();

        let found = find_files(root, "deb", &[root.join("gen/dist")]).await.unwrap();
        assert_eq!(found, vec![root.join("deb_dist/pkg/app_1.0_all.DEB")]);
    }

    #[tokio::test]
    async fn shallow_search_ignores_nested_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("deb_dist/pkg")).unwrap();
        std::fs::write(root.join("deb_dist/pkg/nested_1.0_all.deb"), b"x").unwrap();
        std::fs::write(root.join("top_1.0_all.deb"), b"x").unwrap();

        let found = find_files_shallow(root, "deb").await.unwrap();
        assert_eq!(found, vec![root.join("top_1.0_all.deb")]);
        assert!(find_files_shallow(&root.join("missing"), "deb").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_dir_reports_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let listing = list_dir(&tmp.path().join("nope")).await;
        assert_eq!(listing.len(), 1);
        assert!(listing[0].ends_with("does not exist"));
    }

    #[tokio::test]
    async fn list_dir_marks_files_and_directories() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("GenerationTwo")).unwrap();
        std::fs::write(tmp.path().join("a.tar.gz"), b"abc").unwrap();

        let listing = list_dir(tmp.path()).await;
        assert_eq!(listing, vec!["[DIR]  GenerationTwo", "[FILE] a.tar.gz (3 bytes)"]);
    }
}
