//! # Screenshot Sorter
//!
//! Sorts iMessage screenshots out of a folder of images.
//!
//! ## How it works
//! Each image is downsampled to a small fixed raster, converted to HSV, and
//! bucketed into white/grey, blue/green and "other" color percentages. A
//! tuned threshold rule over those percentages decides whether the image
//! looks like an iMessage conversation, and the file is copied into
//! `detected-screenshots/` or `undetected/` accordingly. Source files are
//! never deleted.
//!
//! ## Architecture
//! The library is split into a core engine and presentation layers:
//! - `core` - scanning, classification and sorting
//! - `events` - event-driven progress reporting (GUI-ready)
//! - `error` - error types
//! - `cli` - command-line interface (lives in the binary)

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{Result, SorterError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
