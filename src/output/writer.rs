use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Writes `contents` to `path` through a temp file in the same directory,
/// so readers never observe a half-written file.
///
/// An existing file keeps its permissions; a new one is created world-readable.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(contents)?;
    temp_file.flush()?;

    // Temp files are created owner-only
    if let Some(permissions) = target_permissions(path) {
        temp_file.as_file().set_permissions(permissions)?;
    }

    // Atomic rename to final path
    temp_file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

fn target_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(metadata) = fs::metadata(path) {
        return Some(metadata.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(NEW_FILE_MODE))
    }
    #[cfg(not(unix))]
    {
        None
    }
}
