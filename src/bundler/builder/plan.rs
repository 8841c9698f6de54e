//! Build plan from host and requested package types.

use crate::bundler::{platform::PackageType, settings::HostPlatform};

/// Package types requested on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildRequest {
    pub exe: bool,
    pub deb: bool,
    pub dmg: bool,
    pub all: bool,
}

/// Ordered list of builds to run.
///
/// The host's native package comes first, then each explicit flag in the
/// order exe, deb, dmg, then `all` (exe, deb, and dmg only on macOS).
/// Duplicates are kept: a later build of the same type replaces the earlier
/// artifact in `dist`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildPlan {
    steps: Vec<PackageType>,
}

impl BuildPlan {
    pub fn new(host: &HostPlatform, request: BuildRequest) -> Self {
        let mut steps = Vec::new();

        if let Some(native) = PackageType::for_host(host) {
            steps.push(native);
        }

        let explicit = [
            (request.exe, PackageType::Exe),
            (request.deb, PackageType::Deb),
            (request.dmg, PackageType::Dmg),
        ];
        steps.extend(explicit.into_iter().filter(|(on, _)| *on).map(|(_, t)| t));

        if request.all {
            steps.push(PackageType::Exe);
            steps.push(PackageType::Deb);
            if host.is_macos() {
                steps.push(PackageType::Dmg);
            }
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[PackageType] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::platform::PackageType::*;

    #[test]
    fn host_build_only_without_flags() {
        let plan = BuildPlan::new(&HostPlatform::Linux, BuildRequest::default());
        assert_eq!(plan.steps(), [Deb]);
    }

    #[test]
    fn explicit_flags_follow_fixed_order() {
        let request = BuildRequest {
            dmg: true,
            exe: true,
            ..Default::default()
        };
        let plan = BuildPlan::new(&HostPlatform::Windows, request);
        assert_eq!(plan.steps(), [Exe, Exe, Dmg]);
    }

    #[test]
    fn all_skips_dmg_off_macos() {
        let request = BuildRequest {
            all: true,
            ..Default::default()
        };
        assert_eq!(BuildPlan::new(&HostPlatform::Linux, request).steps(), [Deb, Exe, Deb]);
        assert_eq!(BuildPlan::new(&HostPlatform::MacOs, request).steps(), [Dmg, Exe, Deb, Dmg]);
    }

    #[test]
    fn unknown_host_without_flags_is_empty() {
        let plan = BuildPlan::new(&HostPlatform::Unknown("sunos5".into()), BuildRequest::default());
        assert!(plan.steps().is_empty());

        let request = BuildRequest {
            deb: true,
            ..Default::default()
        };
        assert_eq!(BuildPlan::new(&HostPlatform::Unknown("sunos5".into()), request).steps(), [Deb]);
    }
}
