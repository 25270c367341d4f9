// ============================================================================
// tcap-core/src/processing/output.rs
// ============================================================================
//
// OUTPUT STRATEGY: Direct Write or Atomic In-Place Replacement
//
// Direct mode renders straight to the destination; the source is never
// touched so no temporary file is involved.
//
// In-place mode follows a small state machine:
//
//   Created(temp) -> Rendering -> RenderFailed    -> CleanedUp (terminal)
//                              -> RenderSucceeded -> Promoted  (terminal)
//
// The temp file sits in the source's own directory, so promotion is a single
// rename. Until that rename the original is untouched; readers see either the
// old file or the new one, never a partial write.

use crate::config::{DEFAULT_OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::error::CoreResult;
use crate::temp_files::create_sibling_temp_path;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// Where a render writes and where its result ends up.
#[derive(Debug)]
pub enum OutputTarget {
    /// Render directly to `path`.
    Direct { path: PathBuf },
    /// Render to `temp`, then rename it over `target`.
    InPlace { target: PathBuf, temp: TempPath },
}

/// Default output for `video`: `<stem>_thumb<ext>` in the same directory.
#[must_use]
pub fn default_output_path(video: &Path) -> PathBuf {
    let stem = video
        .file_stem()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    let ext = video
        .extension()
        .map_or_else(|| DEFAULT_OUTPUT_EXTENSION.into(), OsStr::to_string_lossy);
    video.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{ext}"))
}

impl OutputTarget {
    /// Direct mode to `path`, or to the default output next to `video`.
    #[must_use]
    pub fn direct(video: &Path, path: Option<&Path>) -> Self {
        let path = path.map_or_else(|| default_output_path(video), Path::to_path_buf);
        OutputTarget::Direct { path }
    }

    /// In-place mode for `video`. Creates the sibling temp file.
    pub fn in_place(video: &Path) -> CoreResult<Self> {
        let temp = create_sibling_temp_path(video)?;
        log::debug!("Created temp file {} for {}", temp.display(), video.display());
        Ok(OutputTarget::InPlace {
            target: video.to_path_buf(),
            temp,
        })
    }

    /// Path the render should write to.
    #[must_use]
    pub fn render_path(&self) -> &Path {
        match self {
            OutputTarget::Direct { path } => path.as_path(),
            OutputTarget::InPlace { temp, .. } => &**temp,
        }
    }

    /// Path the result ends up at.
    #[must_use]
    pub fn final_path(&self) -> &Path {
        match self {
            OutputTarget::Direct { path } => path.as_path(),
            OutputTarget::InPlace { target, .. } => target.as_path(),
        }
    }

    #[must_use]
    pub fn is_in_place(&self) -> bool {
        matches!(self, OutputTarget::InPlace { .. })
    }

    /// Places the result of a render and returns the final path.
    ///
    /// On failure the render error is returned unchanged; in in-place mode
    /// the temp file is removed first.
    pub fn finish(self, rendered: CoreResult<()>) -> CoreResult<PathBuf> {
        match self {
            OutputTarget::Direct { path } => rendered.map(|()| path),
            OutputTarget::InPlace { target, temp } => match rendered {
                Ok(()) => {
                    temp.persist(&target).map_err(|e| {
                        log::error!("Failed to replace {}: {}", target.display(), e.error);
                        e.error
                    })?;
                    log::debug!("Promoted temp file over {}", target.display());
                    Ok(target)
                }
                Err(err) => {
                    discard_temp(temp);
                    Err(err)
                }
            },
        }
    }
}

/// Best-effort removal; a temp file that is already gone is fine.
fn discard_temp(temp: TempPath) {
    let path = temp.to_path_buf();
    match temp.close() {
        Ok(()) => log::debug!("Removed temp file {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Could not remove temp file {}: {e}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::fs;
    use tempfile::tempdir;

    fn leftover_temps(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.contains(crate::temp_files::TEMP_MARKER))
            .collect()
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/media/clip.mp4")),
            PathBuf::from("/media/clip_thumb.mp4")
        );
        assert_eq!(
            default_output_path(Path::new("clip.mov")),
            PathBuf::from("clip_thumb.mov")
        );
        assert_eq!(
            default_output_path(Path::new("/media/clip")),
            PathBuf::from("/media/clip_thumb.mp4")
        );
    }

    #[test]
    fn test_direct_uses_override() {
        let target = OutputTarget::direct(Path::new("a.mp4"), Some(Path::new("/out/b.mp4")));
        assert_eq!(target.render_path(), Path::new("/out/b.mp4"));
        assert_eq!(target.final_path(), Path::new("/out/b.mp4"));
        assert!(!target.is_in_place());
    }

    #[test]
    fn test_in_place_promotes_on_success() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        fs::write(&video, b"old").unwrap();

        let target = OutputTarget::in_place(&video).unwrap();
        assert_ne!(target.render_path(), video.as_path());
        fs::write(target.render_path(), b"new").unwrap();

        let final_path = target.finish(Ok(())).unwrap();
        assert_eq!(final_path, video);
        assert_eq!(fs::read(&video).unwrap(), b"new");
        assert!(leftover_temps(dir.path()).is_empty());
    }

    #[test]
    fn test_in_place_cleans_up_on_failure() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        fs::write(&video, b"old").unwrap();

        let target = OutputTarget::in_place(&video).unwrap();
        fs::write(target.render_path(), b"partial").unwrap();

        let result = target.finish(Err(CoreError::Config("render blew up".into())));
        assert!(matches!(result, Err(CoreError::Config(msg)) if msg == "render blew up"));
        assert_eq!(fs::read(&video).unwrap(), b"old");
        assert!(leftover_temps(dir.path()).is_empty());
    }

    #[test]
    fn test_in_place_cleanup_tolerates_missing_temp() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        fs::write(&video, b"old").unwrap();

        let target = OutputTarget::in_place(&video).unwrap();
        fs::remove_file(target.render_path()).unwrap();

        let result = target.finish(Err(CoreError::Config("failed".into())));
        assert!(matches!(result, Err(CoreError::Config(_))));
        assert_eq!(fs::read(&video).unwrap(), b"old");
    }
}
