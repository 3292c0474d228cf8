pub mod errors;
pub mod pipeline;
pub mod types;

pub use errors::LoadError;
pub use types::{Charset, SourceDocument};

use std::fs;
use std::path::Path;

use tracing::debug;

/// Read an HTML file from disk and decode it to UTF-8.
pub fn load(path: &Path) -> Result<SourceDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = pipeline::decode_document(path.to_path_buf(), &bytes)?;
    debug!(
        "Loaded {} ({} bytes, charset: {:?})",
        path.display(),
        bytes.len(),
        document.charset
    );
    Ok(document)
}
