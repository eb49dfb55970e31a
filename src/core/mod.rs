//! # Core Module
//!
//! The GUI-agnostic sorting engine.
//!
//! ## Modules
//! - `scanner` - Discovers image files in a directory
//! - `decoder` - Decodes images with format-specific fast paths
//! - `classifier` - Computes HSV color-category percentages
//! - `decider` - Applies the screenshot threshold rule
//! - `sorter` - Copies files into destination directories
//! - `pipeline` - Orchestrates the full workflow

pub mod classifier;
pub mod decider;
pub mod decoder;
pub mod pipeline;
pub mod scanner;
pub mod sorter;

// Re-export commonly used types
pub use classifier::{ColorProfile, TargetSize};
pub use decider::{decide, FileReport, Verdict};
pub use scanner::ImageFile;
pub use sorter::SortDirs;
