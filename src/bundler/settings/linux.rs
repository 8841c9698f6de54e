//! Linux platform-specific settings.

use serde::Deserialize;

/// Debian package (.deb) configuration.
///
/// The package is produced from a source distribution by stdeb.
///
/// # Configuration
///
/// ```toml
/// [debian]
/// sdist_patterns = ["generation_two-*.tar.gz", "generation-two-*.tar.gz"]
/// converter = "py2dsc-deb"
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebianSettings {
    /// Accepted source distribution file name patterns, in priority order.
    pub sdist_patterns: Vec<String>,

    /// Command-line converter looked up on the search path.
    pub converter: String,

    /// Python module providing the same conversion.
    pub converter_module: String,

    /// Python package installed before converting.
    pub converter_package: String,
}

impl Default for DebianSettings {
    fn default() -> Self {
        Self {
            sdist_patterns: vec![
                "generation_two-*.tar.gz".into(),
                "generation-two-*.tar.gz".into(),
            ],
            converter: "py2dsc-deb".into(),
            converter_module: "stdeb.command.py2dsc_deb".into(),
            converter_package: "stdeb".into(),
        }
    }
}
