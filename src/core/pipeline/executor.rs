//! Pipeline execution implementation.

use crate::core::classifier::{classify_colors, TargetSize};
use crate::core::decider::FileReport;
use crate::core::decoder::FastDecoder;
use crate::core::scanner::{DirLister, ImageFile, ImageScanner};
use crate::core::sorter::{place, SortDirs};
use crate::error::SorterError;
use crate::events::{
    null_sender, ClassifyEvent, ClassifyProgress, Event, EventSender, PipelineEvent,
    PipelinePhase, PipelineSummary,
};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::debug;

/// Result of pipeline execution
#[derive(Debug)]
pub struct PipelineResult {
    /// Per-file reports, in processing (lexicographic) order
    pub reports: Vec<FileReport>,
    /// Number of files classified as iMessage screenshots
    pub detected: usize,
    /// Number of files classified as something else
    pub undetected: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Configuration for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory to scan for images
    pub source_dir: PathBuf,
    /// Destination directories
    pub dirs: SortDirs,
    /// Downsample raster the percentages are computed against
    pub resize_to: TargetSize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            dirs: SortDirs::default(),
            resize_to: TargetSize::default(),
        }
    }
}

/// Builder for pipeline configuration
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Set the directory to scan
    pub fn source_dir(mut self, dir: PathBuf) -> Self {
        self.config.source_dir = dir;
        self
    }

    /// Set the destination directories
    pub fn dirs(mut self, dirs: SortDirs) -> Self {
        self.config.dirs = dirs;
        self
    }

    /// Set the downsample raster size
    pub fn resize_to(mut self, target: TargetSize) -> Self {
        self.config.resize_to = target;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline {
            config: self.config,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The screenshot sorting pipeline
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// The active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline without events
    pub fn run(&self) -> Result<PipelineResult, SorterError> {
        self.run_with_events(&null_sender())
    }

    /// Run the pipeline with event reporting.
    ///
    /// Destination directories are created before any file is touched. The
    /// first decode or filesystem error, in file order, aborts the run.
    pub fn run_with_events(
        &self,
        events: &EventSender,
    ) -> Result<PipelineResult, SorterError> {
        let start_time = Instant::now();

        events.send(Event::Pipeline(PipelineEvent::Started));

        self.config.dirs.prepare()?;

        // Phase 1: Scanning
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Scanning,
        }));

        let scanner = DirLister::new();
        let images = scanner.scan_with_events(&self.config.source_dir, events)?;
        let total_images = images.len();
        debug!(total_images, source = %self.config.source_dir.display(), "scan complete");

        // Phase 2: Classifying
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Classifying,
        }));
        events.send(Event::Classify(ClassifyEvent::Started { total_images }));

        let reports = self.classify_all(&images, events)?;

        events.send(Event::Classify(ClassifyEvent::Completed {
            total_classified: reports.len(),
        }));

        // Phase 3: Sorting
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Sorting,
        }));

        let mut detected = 0usize;
        let mut undetected = 0usize;

        for (image, report) in images.iter().zip(&reports) {
            let is_screenshot = report.verdict.is_screenshot();
            place(image, is_screenshot, &self.config.dirs)?;

            if is_screenshot {
                detected += 1;
            } else {
                undetected += 1;
            }

            events.send(Event::Pipeline(PipelineEvent::FileSorted {
                path: image.path.clone(),
                detected: is_screenshot,
            }));
        }

        let duration_ms = start_time.elapsed().as_millis() as u64;
        debug!(detected, undetected, duration_ms, "pipeline complete");

        events.send(Event::Pipeline(PipelineEvent::Completed {
            summary: PipelineSummary {
                total_images,
                detected,
                undetected,
                duration_ms,
            },
        }));

        Ok(PipelineResult {
            reports,
            detected,
            undetected,
            duration_ms,
        })
    }

    /// Classify all images on the rayon pool.
    ///
    /// Files are independent, so classification parallelizes freely; the
    /// collected results come back in input order, which keeps diagnostics
    /// and abort-on-first-error behavior identical to a sequential run.
    fn classify_all(
        &self,
        images: &[ImageFile],
        events: &EventSender,
    ) -> Result<Vec<FileReport>, SorterError> {
        let total = images.len();
        let completed = AtomicUsize::new(0);

        let outcomes: Vec<Result<FileReport, SorterError>> = images
            .par_iter()
            .map(|image| {
                let decoded = FastDecoder::decode(&image.path)?;
                let profile = classify_colors(&decoded, self.config.resize_to)?;

                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                events.send(Event::Classify(ClassifyEvent::Progress(ClassifyProgress {
                    completed: done,
                    total,
                    current_path: image.path.clone(),
                })));

                Ok(FileReport::new(image.file_name.clone(), profile))
            })
            .collect();

        // Surface the first failure in file order, not completion order
        outcomes.into_iter().collect()
    }
}
