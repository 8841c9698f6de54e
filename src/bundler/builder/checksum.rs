//! Artifact checksum calculation.

use crate::bundler::{Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates the SHA-256 checksum of a file.
///
/// Reads in 8 KiB chunks and returns the lowercase hex digest (64 characters).
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_digest() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hello.txt");
        std::fs::write(&path, "hello").unwrap();

        assert_eq!(
            calculate_sha256(&path).await.unwrap(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[tokio::test]
    async fn multi_chunk_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("big.bin");
        std::fs::write(&path, vec![0u8; 8192 * 3 + 17]).unwrap();

        let digest = calculate_sha256(&path).await.unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, format!("{:x}", Sha256::digest(vec![0u8; 8192 * 3 + 17])));
    }

    #[tokio::test]
    async fn missing_file_names_path() {
        let tmp = tempfile::tempdir().unwrap();
        let err = calculate_sha256(&tmp.path().join("nope")).await.unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
