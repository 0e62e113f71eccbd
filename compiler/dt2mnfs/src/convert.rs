//! The conversion pipeline: load → resolve → assemble → render → write.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use gb_manifest::{Manifest, ManifestError, ManifestHeader};
use gb_resolve::ResolveError;
use gb_symtab::SymbolTable;

use crate::{ConvertOptions, Error, OutputFormat};

/// Exit status for a wrong argument count.
pub const EXIT_USAGE: i32 = 1;
/// Exit status for a failed conversion.
pub const EXIT_FAILURE: i32 = 2;

/// Resolve `table` into a manifest carrying `header`.
pub fn build_manifest(
    table: &SymbolTable,
    header: ManifestHeader,
) -> Result<Manifest, ResolveError> {
    let resolved = gb_resolve::resolve(table)?;
    Ok(resolved.into_manifest(header))
}

/// Serialize `manifest` in `format`.
pub fn render(manifest: &Manifest, format: OutputFormat) -> Result<Vec<u8>, ManifestError> {
    match format {
        OutputFormat::Mnfs => Ok(manifest.to_string().into_bytes()),
        OutputFormat::Mnfb => manifest.to_mnfb(),
    }
}

/// Convert the header at `input` and write the manifest to `output`.
///
/// `output` is replaced only after the whole manifest has been rendered and
/// written, so a failed conversion leaves it untouched.
#[tracing::instrument(level = "debug", skip(options), fields(format = ?options.format))]
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<(), Error> {
    let table = SymbolTable::load(input)?;
    let manifest = build_manifest(&table, options.header)?;
    let bytes = render(&manifest, options.format)?;
    write_atomic(output, &bytes).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = bytes.len(), "wrote manifest");
    Ok(())
}

/// Write `bytes` to a temporary file next to `path`, then rename it over
/// `path`. An existing `path` keeps its permissions.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file().set_permissions(existing.permissions())?;
    }
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Run the CLI on `args` (program name first) and return the exit status.
pub fn run(args: &[String]) -> i32 {
    let program = args.first().map_or("dt2mnfs", String::as_str);
    let [_, input, output] = args else {
        eprintln!("usage: {program} <input> <output>");
        return EXIT_USAGE;
    };

    let (input, output) = (Path::new(input), Path::new(output));
    match convert(input, output, &ConvertOptions::for_output(output)) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{program}: error: {err}");
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
