//! Progress reporting seam between the bundler and its front end.
//!
//! Build steps describe what they do through a [`Reporter`]; the CLI supplies
//! a terminal implementation. Diagnostics that only matter when debugging go
//! through `log` instead.

/// Receives user-facing progress lines from build steps.
pub trait Reporter {
    /// Starts a new build section.
    fn section(&self, title: &str);
    /// Plain progress line.
    fn progress(&self, message: &str);
    /// Detail line belonging to the previous progress line.
    fn indent(&self, message: &str);
    /// A step finished successfully.
    fn success(&self, message: &str);
    /// A recoverable problem.
    fn warn(&self, message: &str);
    /// A problem that ends the current build.
    fn error(&self, message: &str);
}

/// Discards every line.
#[cfg(test)]
pub(crate) struct Silent;

#[cfg(test)]
impl Reporter for Silent {
    fn section(&self, _: &str) {}
    fn progress(&self, _: &str) {}
    fn indent(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
    fn error(&self, _: &str) {}
}

/// Keeps every line with its marker so tests can assert on the report.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct Recorder {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Recorder {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    fn push(&self, marker: &str, message: &str) {
        self.lines.lock().unwrap().push(format!("{marker}{message}"));
    }
}

#[cfg(test)]
impl Reporter for Recorder {
    fn section(&self, title: &str) {
        self.push("== ", title);
    }
    fn progress(&self, message: &str) {
        self.push("", message);
    }
    fn indent(&self, message: &str) {
        self.push("   ", message);
    }
    fn success(&self, message: &str) {
        self.push("[OK] ", message);
    }
    fn warn(&self, message: &str) {
        self.push("[WARN] ", message);
    }
    fn error(&self, message: &str) {
        self.push("[ERROR] ", message);
    }
}
