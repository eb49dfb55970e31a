//! File filtering logic for the scanner.

use std::path::Path;

/// Filters files to determine if they are candidate images
pub struct ImageFilter {
    /// File extensions to include
    extensions: std::collections::HashSet<String>,
}

impl ImageFilter {
    /// Create a new filter with the default accepted extensions.
    pub fn new() -> Self {
        Self {
            extensions: vec![
                "jpeg".to_string(),
                "jpg".to_string(),
                "png".to_string(),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Override the list of extensions to accept
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions.into_iter().collect();
        self
    }

    /// Check if a file should be included.
    ///
    /// The extension match is case-sensitive: `shot.PNG` is skipped.
    pub fn should_include(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            self.extensions.contains(ext)
        } else {
            false
        }
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        Self::new()
    }
}
