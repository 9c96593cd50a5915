use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ManifestError, UpdateError};

/// Rewrites `path` through `transform` without ever exposing a partial file.
///
/// The new content is streamed into a temporary file in the same directory
/// and renamed over `path` only after it has been flushed and synced. If
/// anything fails the temporary file is removed and `path` is left as it was.
///
/// # Errors
///
/// Returns [`ManifestError::UpdateFailed`] carrying the first failure, whether
/// it came from I/O or from `transform`.
pub fn replace_atomically<T, F>(path: &Path, transform: F) -> Result<T, ManifestError>
where
    F: FnOnce(&mut dyn BufRead, &mut dyn Write) -> Result<T, UpdateError>,
{
    replace(path, transform).map_err(|source| ManifestError::UpdateFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn replace<T, F>(path: &Path, transform: F) -> Result<T, UpdateError>
where
    F: FnOnce(&mut dyn BufRead, &mut dyn Write) -> Result<T, UpdateError>,
{
    let source = File::open(path)?;
    let permissions = source.metadata()?.permissions();

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut temp = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(parent_dir(path))?;
    debug!(file = %path.display(), temp = %temp.path().display(), "created temporary file");

    let output = {
        let mut reader = BufReader::new(source);
        let mut writer = BufWriter::new(temp.as_file_mut());
        let output = transform(&mut reader, &mut writer)?;
        writer.flush()?;
        output
    };

    temp.as_file().set_permissions(permissions)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    debug!(file = %path.display(), "replaced file");

    Ok(output)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
