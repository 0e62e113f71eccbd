//! Devicetree header → Greybus manifest converter.
//!
//! ```text
//! dt2mnfs <input> <output>
//! ```
//!
//! `<input>` is the `#define` header the devicetree preprocessor emits.
//! `<output>` receives the manifest: `mnfs` text, or the packed `mnfb` blob
//! when the path ends in `.mnfb`. The output is only written once every
//! descriptor has resolved.

mod convert;
mod options;
mod tracing_setup;

use std::path::PathBuf;

pub use convert::{build_manifest, convert, render, run, EXIT_FAILURE, EXIT_USAGE};
pub use options::{ConvertOptions, OutputFormat};
pub use tracing_setup::init_tracing;

/// Anything that stops a conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] gb_symtab::LoadError),

    #[error(transparent)]
    Resolve(#[from] gb_resolve::ResolveError),

    #[error(transparent)]
    Manifest(#[from] gb_manifest::ManifestError),

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
