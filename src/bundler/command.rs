//! External tool invocation.
//!
//! Every external step (freezing tool, pip, sdist, stdeb, create-dmg) runs
//! through [`ToolCommand`]. Required commands abort the workflow on failure;
//! tolerant commands report their error output and let the caller fall back.

use crate::bundler::error::{Error, Result};
use crate::bundler::report::Reporter;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// A command line to run, optionally inside a working directory.
#[derive(Clone, Debug)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl ToolCommand {
    /// Starts a command for `program`.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Sets the working directory.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Renders the command line for display.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn announce(&self, out: &dyn Reporter) {
        out.progress(&format!("Running: {}", self.display()));
        if let Some(cwd) = &self.cwd {
            out.progress(&format!("  Working directory: {}", cwd.display()));
        }
    }

    fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    /// Runs the command, failing on spawn errors and non-zero exit.
    ///
    /// Output streams are inherited so tool progress shows up live.
    pub async fn run(&self, out: &dyn Reporter) -> Result<()> {
        self.announce(out);

        let status = self
            .command()
            .status()
            .await
            .map_err(|error| Error::CommandFailed {
                command: self.display(),
                error,
            })?;

        if !status.success() {
            return Err(Error::CommandStatus {
                command: self.display(),
                status,
            });
        }
        Ok(())
    }

    /// Runs the command, reporting failure instead of returning an error.
    ///
    /// Stderr is captured and printed only when the command fails. Returns
    /// `true` when the command ran and exited successfully.
    pub async fn run_tolerant(&self, out: &dyn Reporter) -> bool {
        self.announce(out);

        let output = match self
            .command()
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                out.indent(&format!("Error output: failed to start {}: {}", self.display(), e));
                return false;
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.status.success() {
            if !stderr.trim().is_empty() {
                log::debug!("{} stderr:\n{}", self.display(), stderr.trim_end());
            }
            return true;
        }

        if stderr.trim().is_empty() {
            out.indent(&format!("Exited with {}", output.status));
        } else {
            out.indent(&format!("Error output: {}", stderr.trim_end()));
        }
        false
    }

    /// Runs the command silently and reports whether it succeeded.
    ///
    /// Used for availability probes where neither output nor failure matters.
    pub async fn probe(&self) -> bool {
        let status = self
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
        matches!(status, Ok(s) if s.success())
    }
}
