use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces `path` with `contents` via a sibling temp file and a rename,
/// so readers see either the old or the new file, never a partial one.
/// The original file's permissions are carried over.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn to_unix_string<P: AsRef<Path>>(p: P) -> String {
    let s = p.as_ref().to_string_lossy().into_owned();
    s.replace('\\', "/")
}
