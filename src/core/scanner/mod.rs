//! # Scanner Module
//!
//! Discovers image files in a single directory.
//!
//! ## Supported Formats
//! - JPEG (.jpg, .jpeg)
//! - PNG (.png)
//!
//! The listing is non-recursive and the extension match is case-sensitive,
//! matching the tuned corpus this sorter was calibrated on. Results are
//! sorted lexicographically by file name so downstream output is
//! deterministic.
//!
//! ## Example
//! ```rust,ignore
//! use screenshot_sorter::core::scanner::{DirLister, ImageScanner};
//!
//! let scanner = DirLister::new();
//! let images = scanner.scan(Path::new("."))?;
//! ```

mod filter;
mod lister;

pub use filter::ImageFilter;
pub use lister::DirLister;

use crate::error::ScanError;
use crate::events::EventSender;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Represents a discovered image file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFile {
    /// Path to the image file
    pub path: PathBuf,
    /// File name component, used for diagnostics and as the copy target name
    pub file_name: String,
    /// File size in bytes
    pub size: u64,
}

/// Trait for image scanners
///
/// Implement this trait to create custom scanners (e.g., for testing).
pub trait ImageScanner: Send + Sync {
    /// Scan a directory and return discovered images in lexicographic order
    fn scan(&self, path: &Path) -> Result<Vec<ImageFile>, ScanError>;

    /// Scan with progress reporting via events
    fn scan_with_events(
        &self,
        path: &Path,
        events: &EventSender,
    ) -> Result<Vec<ImageFile>, ScanError>;
}
