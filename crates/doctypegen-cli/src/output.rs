//! Writing generated models to disk.
//!
//! Files are replaced atomically: the new content goes to a temporary file in
//! the destination directory, which is then renamed over the final path. A
//! failure at any step leaves an existing model untouched and never leaves a
//! partial one behind.

use crate::codegen::naming::model_file_name;
use crate::codegen::{GenerateOptions, generate_source};
use doctypegen_core::{DocTypeError, DocTypeResult, Document};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Destination used when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "./models";

/// Generate the model for `document` and write it into `destination`.
///
/// Returns the path of the written file, `<destination>/<TypeName>.rs`.
/// Nothing is written if generation fails.
pub fn write_model(
    document: &Document,
    destination: &Path,
    options: &GenerateOptions,
) -> DocTypeResult<PathBuf> {
    let source = generate_source(document, options)?;

    fs::create_dir_all(destination).map_err(|e| DocTypeError::io(destination, e))?;

    let path = destination.join(model_file_name(document.name()));
    write_atomic(&path, source.as_bytes())?;

    info!(
        doctype = %document.name(),
        path = %path.display(),
        bytes = source.len(),
        "wrote model"
    );

    Ok(path)
}

/// Replace the file at `path` with `contents`.
///
/// The parent directory must exist.
pub fn write_atomic(path: &Path, contents: &[u8]) -> DocTypeResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = temp_file_in(dir).map_err(|e| DocTypeError::io(dir, e))?;

    temp.write_all(contents)
        .map_err(|e| DocTypeError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| DocTypeError::io(temp.path(), e))?;

    // On failure the temp file is dropped with the error, which deletes it.
    temp.persist(path)
        .map_err(|e| DocTypeError::io(path, e.error))?;

    Ok(())
}

fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".doctypegen-").suffix(".tmp");

    // tempfile creates 0600 files by default.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    builder.tempfile_in(dir)
}
