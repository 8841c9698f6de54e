//! Host operating system detection.

use std::fmt;

/// Operating system the bundler is running on.
///
/// Detected from a platform identifier string. Both Rust's
/// `std::env::consts::OS` values and Python-style `sys.platform` values are
/// understood, so `"win32"`, `"windows"`, `"linux"`, `"darwin"` and `"macos"`
/// all map to a known host.
///
/// # Examples
///
/// ```
/// use generation_two_bundler::bundler::HostPlatform;
///
/// assert_eq!(HostPlatform::from_identifier("win32"), HostPlatform::Windows);
/// assert_eq!(HostPlatform::from_identifier("Darwin"), HostPlatform::MacOs);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostPlatform {
    /// Any identifier starting with `win`.
    Windows,
    /// Any identifier starting with `linux`.
    Linux,
    /// `darwin` or `macos`.
    MacOs,
    /// Anything else, with the lowercased identifier kept for diagnostics.
    Unknown(String),
}

impl HostPlatform {
    /// Detects the platform this binary was compiled for.
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Classifies a platform identifier string (case-insensitive).
    pub fn from_identifier(identifier: &str) -> Self {
        let id = identifier.trim().to_ascii_lowercase();
        if id.starts_with("win") {
            HostPlatform::Windows
        } else if id.starts_with("linux") {
            HostPlatform::Linux
        } else if id == "darwin" || id == "macos" {
            HostPlatform::MacOs
        } else {
            HostPlatform::Unknown(id)
        }
    }

    /// Returns true on macOS hosts.
    pub fn is_macos(&self) -> bool {
        matches!(self, HostPlatform::MacOs)
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPlatform::Windows => f.write_str("windows"),
            HostPlatform::Linux => f.write_str("linux"),
            HostPlatform::MacOs => f.write_str("macos"),
            HostPlatform::Unknown(id) => f.write_str(id),
        }
    }
}
