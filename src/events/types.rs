//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the sorting pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Scanning phase events
    Scan(ScanEvent),
    /// Classification phase events
    Classify(ClassifyEvent),
    /// Pipeline-level events
    Pipeline(PipelineEvent),
}

/// Events during the scanning phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Scanning has started
    Started { path: PathBuf },
    /// An image file was found
    ImageFound { path: PathBuf },
    /// Scanning completed
    Completed { total_images: usize },
}

/// Events during the classification phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClassifyEvent {
    /// Classification has started
    Started { total_images: usize },
    /// Progress update during classification
    Progress(ClassifyProgress),
    /// Classification completed
    Completed { total_classified: usize },
}

/// Progress information during classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyProgress {
    /// Number of images classified so far
    pub completed: usize,
    /// Total number of images to classify
    pub total: usize,
    /// Current image being classified
    pub current_path: PathBuf,
}

/// Pipeline-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// Pipeline has started
    Started,
    /// Moving to a new phase
    PhaseChanged { phase: PipelinePhase },
    /// A file was copied into its destination directory
    FileSorted { path: PathBuf, detected: bool },
    /// Pipeline completed successfully
    Completed { summary: PipelineSummary },
    /// Pipeline encountered a fatal error
    Error { message: String },
}

/// Phases of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelinePhase {
    Scanning,
    Classifying,
    Sorting,
}

/// Summary of pipeline results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Total images processed
    pub total_images: usize,
    /// Number classified as iMessage screenshots
    pub detected: usize,
    /// Number classified as something else
    pub undetected: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelinePhase::Scanning => write!(f, "Scanning"),
            PipelinePhase::Classifying => write!(f, "Classifying"),
            PipelinePhase::Sorting => write!(f, "Sorting"),
        }
    }
}
