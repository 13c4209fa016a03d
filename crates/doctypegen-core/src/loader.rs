//! Schema loader

use crate::document::Document;
use crate::error::{DocTypeError, DocTypeResult};
use std::path::Path;
use tracing::debug;

/// Load a DocType document from a JSON file
///
/// Field and permission order follows the file.
pub fn load(path: impl AsRef<Path>) -> DocTypeResult<Document> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| DocTypeError::io(path, e))?;

    let document =
        Document::from_slice(&bytes).map_err(|source| DocTypeError::MalformedDocument {
            origin: path.display().to_string(),
            source,
        })?;

    debug!(
        path = %path.display(),
        doctype = %document.name(),
        fields = document.fields.len(),
        permissions = document.permissions.len(),
        "loaded DocType document"
    );

    Ok(document)
}
