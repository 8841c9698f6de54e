//! Command line argument parsing and validation.

use crate::bundler::BuildRequest;
use clap::Parser;
use std::path::PathBuf;

/// Release bundler for Generation Two
#[derive(Parser, Debug)]
#[command(
    name = "generation_two_bundler",
    version,
    about = "Release bundler for Generation Two",
    long_about = "Builds the Generation Two release artifacts: a single-file Windows executable, \
a Debian package and a macOS disk image.

The artifact for the current host is always built. Flags add more builds:
  generation_two_bundler              # host artifact only
  generation_two_bundler --deb --exe  # host artifact, then exe, then deb
  generation_two_bundler --all        # host artifact, then exe, deb (and dmg on macOS)

Artifacts are written to <dir>/dist, which is recreated on every run."
)]
pub struct Args {
    /// Also build the Windows executable
    #[arg(long)]
    pub exe: bool,

    /// Also build the Debian package
    #[arg(long)]
    pub deb: bool,

    /// Also build the macOS disk image (macOS only)
    #[arg(long)]
    pub dmg: bool,

    /// Build exe and deb, plus dmg on macOS
    #[arg(long)]
    pub all: bool,

    /// Application directory holding gui/, constants/ and setup.py
    #[arg(short, long, value_name = "PATH", env = "GENERATION_TWO_DIR")]
    pub dir: Option<PathBuf>,

    /// Config file (default: <dir>/bundler.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Python interpreter used for PyInstaller, pip and stdeb
    #[arg(long, value_name = "PATH", env = "GENERATION_TWO_PYTHON")]
    pub python: Option<PathBuf>,

    /// Platform identifier overriding host detection (e.g. linux, win32, darwin)
    #[arg(long, value_name = "ID", env = "GENERATION_TWO_PLATFORM", hide = true)]
    pub host_platform: Option<String>,

    /// Print extra diagnostics
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(dir) = &self.dir {
            if !dir.is_dir() {
                return Err(format!("--dir {} is not a directory", dir.display()));
            }
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(format!("--config {} does not exist", config.display()));
            }
        }

        Ok(())
    }

    /// Package types requested by flags.
    pub fn request(&self) -> BuildRequest {
        BuildRequest {
            exe: self.exe,
            deb: self.deb,
            dmg: self.dmg,
            all: self.all,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("generation_two_bundler").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn flags_are_combinable() {
        let args = parse(&["--dmg", "--exe"]);
        assert_eq!(
            args.request(),
            BuildRequest {
                exe: true,
                dmg: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Args::try_parse_from(["generation_two_bundler", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_dir_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let args = parse(&["--dir", missing.to_str().unwrap()]);
        assert!(args.validate().unwrap_err().contains("not a directory"));
    }
}
