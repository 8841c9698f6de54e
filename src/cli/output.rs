//! Terminal output with status markers.
//!
//! Every user-visible progress line goes through [`OutputManager`] so the
//! `[OK]` / `[WARN]` / `[ERROR]` markers and section banners stay uniform.

use crate::bundler::Reporter;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const BANNER_WIDTH: usize = 60;

/// Output manager for colored terminal output
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    ///
    /// `quiet` suppresses everything except errors; `verbose` enables
    /// [`verbose`](Self::verbose) lines.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Prints a banner framed by `=` lines.
    pub fn section(&self, title: &str) {
        if self.quiet {
            return;
        }
        let rule = "=".repeat(BANNER_WIDTH);
        self.emit(Stream::Stdout, &format!("\n{rule}\n{title}\n{rule}"));
    }

    /// Prints a plain progress line.
    pub fn progress(&self, message: &str) {
        if !self.quiet {
            self.emit(Stream::Stdout, message);
        }
    }

    /// Prints an indented detail line.
    pub fn indent(&self, message: &str) {
        if !self.quiet {
            self.emit(Stream::Stdout, &format!("   {message}"));
        }
    }

    /// Prints an `[OK]` line.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.marked(Stream::Stdout, Color::Green, "[OK]", message);
        }
    }

    /// Prints a `[WARN]` line.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            self.marked(Stream::Stdout, Color::Yellow, "[WARN]", message);
        }
    }

    /// Prints an `[ERROR]` line on stderr. Never suppressed.
    pub fn error(&self, message: &str) {
        self.marked(Stream::Stderr, Color::Red, "[ERROR]", message);
    }

    /// Prints a line only in verbose mode.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            self.emit(Stream::Stdout, message);
        }
    }

    fn marked(&self, stream: Stream, color: Color, marker: &str, message: &str) {
        let mut out = stream.open();
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(true);
        // Write errors (closed pipe) are ignored
        let _ = out.set_color(&spec);
        let _ = write!(out, "{marker}");
        let _ = out.reset();
        let _ = writeln!(out, " {message}");
    }

    fn emit(&self, stream: Stream, message: &str) {
        let _ = writeln!(stream.open(), "{message}");
    }
}

impl Reporter for OutputManager {
    fn section(&self, title: &str) {
        OutputManager::section(self, title)
    }

    fn progress(&self, message: &str) {
        OutputManager::progress(self, message)
    }

    fn indent(&self, message: &str) {
        OutputManager::indent(self, message)
    }

    fn success(&self, message: &str) {
        OutputManager::success(self, message)
    }

    fn warn(&self, message: &str) {
        OutputManager::warn(self, message)
    }

    fn error(&self, message: &str) {
        OutputManager::error(self, message)
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new(false, false)
    }
}

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn open(self) -> StandardStream {
        match self {
            Stream::Stdout => StandardStream::stdout(color_choice(std::io::stdout().is_terminal())),
            Stream::Stderr => StandardStream::stderr(color_choice(std::io::stderr().is_terminal())),
        }
    }
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
