//! # Sorter Module
//!
//! Places classified files into their destination directories.
//!
//! Files are always copied, never moved: the source directory is left
//! untouched. A pre-existing file of the same name in the destination is
//! silently overwritten.

use crate::core::scanner::ImageFile;
use crate::error::SortError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default destination for images classified as iMessage screenshots
pub const DEFAULT_DETECTED_DIR: &str = "detected-screenshots";
/// Default destination for everything else
pub const DEFAULT_UNDETECTED_DIR: &str = "undetected";

/// The two destination directories, passed explicitly into the pipeline
/// rather than living as globals.
#[derive(Debug, Clone)]
pub struct SortDirs {
    pub detected: PathBuf,
    pub undetected: PathBuf,
}

impl SortDirs {
    /// Destinations relative to the given base directory
    pub fn relative_to(base: &Path) -> Self {
        Self {
            detected: base.join(DEFAULT_DETECTED_DIR),
            undetected: base.join(DEFAULT_UNDETECTED_DIR),
        }
    }

    /// Create both directories if they don't already exist.
    ///
    /// Idempotent; called once before any file is processed.
    pub fn prepare(&self) -> Result<(), SortError> {
        for dir in [&self.detected, &self.undetected] {
            fs::create_dir_all(dir).map_err(|e| SortError::CreateDirectory {
                path: dir.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Destination directory for a verdict
    pub fn for_verdict(&self, is_screenshot: bool) -> &Path {
        if is_screenshot {
            &self.detected
        } else {
            &self.undetected
        }
    }
}

impl Default for SortDirs {
    fn default() -> Self {
        Self::relative_to(Path::new("."))
    }
}

/// Copy an image into the destination directory for its verdict.
///
/// The original (undownsampled) file is copied with its name preserved;
/// an existing file of the same name is overwritten. Returns the
/// destination path.
pub fn place(
    image: &ImageFile,
    is_screenshot: bool,
    dirs: &SortDirs,
) -> Result<PathBuf, SortError> {
    if !image.path.exists() {
        return Err(SortError::SourceMissing {
            path: image.path.clone(),
        });
    }

    let dest = dirs.for_verdict(is_screenshot).join(&image.file_name);

    fs::copy(&image.path, &dest).map_err(|e| SortError::CopyFailed {
        from: image.path.clone(),
        to: dest.clone(),
        source: e,
    })?;

    Ok(dest)
}
