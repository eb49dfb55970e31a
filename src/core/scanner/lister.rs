//! Directory listing implementation using walkdir.

use super::{filter::ImageFilter, ImageFile, ImageScanner};
use crate::error::ScanError;
use crate::events::{Event, EventSender, ScanEvent};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Scanner implementation that lists a single directory, non-recursively.
pub struct DirLister {
    filter: ImageFilter,
}

impl DirLister {
    /// Create a new lister with the default image filter
    pub fn new() -> Self {
        Self {
            filter: ImageFilter::new(),
        }
    }

    /// Create a lister with a custom filter
    pub fn with_filter(filter: ImageFilter) -> Self {
        Self { filter }
    }

    fn list_directory(
        &self,
        root: &Path,
        events: Option<&EventSender>,
    ) -> Result<Vec<ImageFile>, ScanError> {
        if !root.exists() || !root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut images = Vec::new();

        // min_depth(1) skips the root itself; max_depth(1) keeps the
        // listing non-recursive.
        for entry_result in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry_result.map_err(|e| {
                let path = e.path().map(|p| p.to_path_buf()).unwrap_or_default();
                if e.io_error().map(|io| io.kind())
                    == Some(std::io::ErrorKind::PermissionDenied)
                {
                    ScanError::PermissionDenied { path }
                } else {
                    ScanError::ReadDirectory {
                        path,
                        source: std::io::Error::other(e.to_string()),
                    }
                }
            })?;

            let path = entry.path();
            if path.is_dir() || !self.filter.should_include(path) {
                continue;
            }

            let metadata = fs::metadata(path).map_err(|e| ScanError::ReadDirectory {
                path: path.to_path_buf(),
                source: e,
            })?;

            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            if let Some(sender) = events {
                sender.send(Event::Scan(ScanEvent::ImageFound {
                    path: path.to_path_buf(),
                }));
            }

            images.push(ImageFile {
                path: path.to_path_buf(),
                file_name,
                size: metadata.len(),
            });
        }

        // Stable processing order keeps the per-file diagnostics and the
        // abort-on-first-error behavior deterministic.
        images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        Ok(images)
    }
}

impl Default for DirLister {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageScanner for DirLister {
    fn scan(&self, path: &Path) -> Result<Vec<ImageFile>, ScanError> {
        self.scan_with_events(path, &crate::events::null_sender())
    }

    fn scan_with_events(
        &self,
        path: &Path,
        events: &EventSender,
    ) -> Result<Vec<ImageFile>, ScanError> {
        events.send(Event::Scan(ScanEvent::Started {
            path: path.to_path_buf(),
        }));

        let images = self.list_directory(path, Some(events))?;

        events.send(Event::Scan(ScanEvent::Completed {
            total_images: images.len(),
        }));

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_image(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        // Write minimal JPEG header
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        path
    }

    #[test]
    fn scan_empty_directory_returns_empty_vec() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = DirLister::new();

        let result = scanner.scan(temp_dir.path()).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn scan_finds_single_image() {
        let temp_dir = TempDir::new().unwrap();
        create_test_image(&temp_dir, "shot.jpg");

        let scanner = DirLister::new();
        let result = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "shot.jpg");
    }

    #[test]
    fn scan_excludes_non_image_files() {
        let temp_dir = TempDir::new().unwrap();
        create_test_image(&temp_dir, "shot.jpg");
        File::create(temp_dir.path().join("notes.txt")).unwrap();
        File::create(temp_dir.path().join("archive.zip")).unwrap();

        let scanner = DirLister::new();
        let result = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "shot.jpg");
    }

    #[test]
    fn scan_skips_uppercase_extensions() {
        let temp_dir = TempDir::new().unwrap();
        create_test_image(&temp_dir, "lower.png");
        create_test_image(&temp_dir, "upper.PNG");

        let scanner = DirLister::new();
        let result = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "lower.png");
    }

    #[test]
    fn scan_does_not_recurse_into_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        create_test_image(&temp_dir, "root.jpg");

        let subdir = temp_dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();
        let nested = subdir.join("nested.jpg");
        let mut file = File::create(&nested).unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let scanner = DirLister::new();
        let result = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "root.jpg");
    }

    #[test]
    fn scan_returns_files_in_lexicographic_order() {
        let temp_dir = TempDir::new().unwrap();
        create_test_image(&temp_dir, "charlie.png");
        create_test_image(&temp_dir, "alpha.png");
        create_test_image(&temp_dir, "bravo.jpeg");

        let scanner = DirLister::new();
        let result = scanner.scan(temp_dir.path()).unwrap();

        let names: Vec<_> = result.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["alpha.png", "bravo.jpeg", "charlie.png"]);
    }

    #[test]
    fn scan_nonexistent_directory_returns_error() {
        let scanner = DirLister::new();
        let result = scanner.scan(Path::new("/nonexistent/path/12345"));

        assert!(matches!(
            result,
            Err(ScanError::DirectoryNotFound { .. })
        ));
    }
}
