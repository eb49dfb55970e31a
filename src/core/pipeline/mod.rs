//! # Pipeline Module
//!
//! Orchestrates the full workflow: scan → classify → decide → copy.
//!
//! ## Example
//! ```rust,ignore
//! use screenshot_sorter::core::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::builder()
//!     .source_dir(".".into())
//!     .build();
//! let result = pipeline.run()?;
//! println!("{} screenshots detected", result.detected);
//! ```

mod executor;

pub use executor::{Pipeline, PipelineBuilder, PipelineConfig, PipelineResult};
