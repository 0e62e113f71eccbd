//! Conversion settings.

use std::path::Path;

use gb_manifest::ManifestHeader;

/// Extension selecting the binary output format.
const MNFB_EXTENSION: &str = "mnfb";

/// Serialized form of the manifest.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// `mnfs` text.
    #[default]
    Mnfs,
    /// Packed `mnfb` binary.
    Mnfb,
}

impl OutputFormat {
    /// Pick the format from the output path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case(MNFB_EXTENSION) => OutputFormat::Mnfb,
            _ => OutputFormat::Mnfs,
        }
    }
}

/// Settings for one conversion.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ConvertOptions {
    /// Header version written into the manifest.
    pub header: ManifestHeader,
    pub format: OutputFormat,
}

impl ConvertOptions {
    /// Default options with the format derived from `output`.
    pub fn for_output(output: &Path) -> Self {
        Self {
            format: OutputFormat::from_path(output),
            ..Self::default()
        }
    }
}
