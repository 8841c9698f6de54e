//! Platform-specific artifact builders.
//!
//! Each [`PackageType`] maps to one platform module exposing
//! `bundle_project`, which builds the artifact, relocates it into the
//! script-local `dist` folder and returns its final path. `Ok(None)` means
//! the build stopped softly after reporting why.

pub mod linux;
pub mod macos;
pub mod windows;

use crate::bundler::settings::HostPlatform;
use std::fmt;

/// Release artifact kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackageType {
    /// Single-file Windows executable.
    Exe,
    /// Debian package.
    Deb,
    /// macOS disk image wrapping the app bundle.
    Dmg,
}

impl PackageType {
    /// All package types in build order.
    pub const ALL: [PackageType; 3] = [PackageType::Exe, PackageType::Deb, PackageType::Dmg];

    /// Command-line flag that requests this package type.
    pub fn flag(self) -> &'static str {
        match self {
            PackageType::Exe => "--exe",
            PackageType::Deb => "--deb",
            PackageType::Dmg => "--dmg",
        }
    }

    /// File extension of the artifact.
    pub fn extension(self) -> &'static str {
        match self {
            PackageType::Exe => "exe",
            PackageType::Deb => "deb",
            PackageType::Dmg => "dmg",
        }
    }

    /// Platform the artifact runs on.
    pub fn platform(self) -> &'static str {
        match self {
            PackageType::Exe => "Windows",
            PackageType::Deb => "Linux",
            PackageType::Dmg => "macOS",
        }
    }

    /// Native package type for a host, if it has one.
    pub fn for_host(host: &HostPlatform) -> Option<Self> {
        match host {
            HostPlatform::Windows => Some(PackageType::Exe),
            HostPlatform::Linux => Some(PackageType::Deb),
            HostPlatform::MacOs => Some(PackageType::Dmg),
            HostPlatform::Unknown(_) => None,
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.platform(), self.extension().to_uppercase())
    }
}
