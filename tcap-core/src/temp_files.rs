//! Temporary file management utilities.
//!
//! In-place renders write into a temporary file that lives next to the file it
//! will replace, so the final rename never crosses a filesystem boundary. The
//! tempfile crate supplies the uniqueness token and removes the file on drop.

use crate::error::{CoreError, CoreResult};
use std::ffi::OsStr;
use std::path::Path;
use tempfile::{Builder as TempFileBuilder, TempPath};

/// Marker placed between the stem and the random token of sibling temp files.
pub const TEMP_MARKER: &str = "_tmp_";

/// Creates `<stem>_tmp_<random><.ext>` in the same directory as `target`.
///
/// The file exists (empty) when this returns; it is deleted when the returned
/// `TempPath` is dropped unless it is persisted first.
pub fn create_sibling_temp_path(target: &Path) -> CoreResult<TempPath> {
    let stem = target
        .file_stem()
        .map(OsStr::to_string_lossy)
        .ok_or_else(|| {
            CoreError::Config(format!("Cannot derive a file stem from {}", target.display()))
        })?;

    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let suffix = target
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let temp_file = TempFileBuilder::new()
        .prefix(&format!("{stem}{TEMP_MARKER}"))
        .suffix(&suffix)
        .tempfile_in(parent)?;

    Ok(temp_file.into_temp_path())
}
