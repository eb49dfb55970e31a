//! # CLI Module
//!
//! Command-line interface for the screenshot sorter.
//!
//! ## Usage
//! ```bash
//! # Sort images in the current directory
//! shot-sort
//!
//! # Sort a specific directory
//! shot-sort ~/Inbox
//!
//! # Custom destinations
//! shot-sort --detected-dir out/screenshots --undetected-dir out/rest
//!
//! # JSON output
//! shot-sort --output json
//! ```

use clap::{Parser, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use screenshot_sorter::core::classifier::TargetSize;
use screenshot_sorter::core::pipeline::{Pipeline, PipelineResult};
use screenshot_sorter::core::sorter::SortDirs;
use screenshot_sorter::error::{Result, SorterError};
use screenshot_sorter::events::{ClassifyEvent, Event, EventChannel, PipelineEvent};
use std::path::PathBuf;
use std::thread;

/// Screenshot Sorter - file iMessage screenshots into their own folder
#[derive(Parser, Debug)]
#[command(name = "shot-sort")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for images
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Destination for detected screenshots
    #[arg(long, default_value = "detected-screenshots")]
    detected_dir: PathBuf,

    /// Destination for everything else
    #[arg(long, default_value = "undetected")]
    undetected_dir: PathBuf,

    /// Downsample edge in pixels (percentages are computed on a size x size raster)
    #[arg(long, default_value = "100")]
    size: u32,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Per-file diagnostics plus a styled summary
    Pretty,
    /// JSON output for scripting
    Json,
    /// Per-file diagnostics only
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    screenshot_sorter::init_tracing();

    let cli = Cli::parse();

    if cli.size == 0 {
        return Err(SorterError::Config(
            "--size must be at least 1".to_string(),
        ));
    }

    let term = Term::stderr();

    if matches!(cli.output, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {}",
            style("Screenshot Sorter").bold().cyan(),
            style(env!("CARGO_PKG_VERSION")).dim()
        ))
        .ok();
    }

    let dirs = SortDirs {
        detected: cli.detected_dir.clone(),
        undetected: cli.undetected_dir.clone(),
    };

    let pipeline = Pipeline::builder()
        .source_dir(cli.dir.clone())
        .dirs(dirs)
        .resize_to(TargetSize::square(cli.size))
        .build();

    // Set up event handling
    let (sender, receiver) = EventChannel::new();

    // Progress bar for pretty output
    let progress = if matches!(cli.output, OutputFormat::Pretty) {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("█▓░"),
        );
        Some(pb)
    } else {
        None
    };

    let progress_clone = progress.clone();

    // Handle events in a separate thread
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Pipeline(PipelineEvent::PhaseChanged { phase }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message(format!("{}", phase));
                    }
                }
                Event::Classify(ClassifyEvent::Started { total_images }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_length(total_images as u64);
                    }
                }
                Event::Classify(ClassifyEvent::Progress(p)) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_position(p.completed as u64);
                    }
                }
                Event::Pipeline(PipelineEvent::Completed { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                _ => {}
            }
        }
    });

    // Run the pipeline
    let result = pipeline.run_with_events(&sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();

    let result = result?;

    // Per-file diagnostic blocks go to stdout verbatim in every mode but
    // json; downstream tooling scrapes them.
    match cli.output {
        OutputFormat::Pretty => {
            print_reports(&result);
            print_pretty_summary(&term, &result);
        }
        OutputFormat::Minimal => print_reports(&result),
        OutputFormat::Json => print_json_results(&result),
    }

    Ok(())
}

fn print_reports(result: &PipelineResult) {
    for report in &result.reports {
        println!();
        println!("{}", report);
    }
}

fn print_pretty_summary(term: &Term, result: &PipelineResult) {
    term.write_line("").ok();
    term.write_line(&format!("{} Sort Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} images processed in {:.1}s",
        style(result.reports.len()).cyan(),
        result.duration_ms as f64 / 1000.0
    ))
    .ok();

    term.write_line(&format!(
        "  {} iMessage screenshots detected",
        style(result.detected).cyan()
    ))
    .ok();

    term.write_line(&format!(
        "  {} other images",
        style(result.undetected).cyan()
    ))
    .ok();

    term.write_line("").ok();
    term.write_line(&format!(
        "{}",
        style("Remember: files were copied, not moved. The source directory is untouched.").dim()
    ))
    .ok();
}

fn print_json_results(result: &PipelineResult) {
    let output = serde_json::json!({
        "total_images": result.reports.len(),
        "detected": result.detected,
        "undetected": result.undetected,
        "duration_ms": result.duration_ms,
        "reports": result.reports.iter().map(|r| {
            serde_json::json!({
                "file": r.file_name,
                "white_grey": r.profile.white_grey,
                "blue_green": r.profile.blue_green,
                "other": r.profile.other,
                "screenshot": r.verdict.is_screenshot(),
            })
        }).collect::<Vec<_>>()
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
