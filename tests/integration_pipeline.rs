//! Integration tests for the sorting pipeline.
//!
//! These tests verify end-to-end behavior with real encoded images:
//! - routing into the two destination directories
//! - copy (not move) and overwrite semantics
//! - diagnostic report content
//! - abort on undecodable input

use assert_fs::prelude::*;
use assert_fs::TempDir;
use image::{DynamicImage, ImageBuffer, Rgb};
use predicates::prelude::*;
use screenshot_sorter::core::classifier::TargetSize;
use screenshot_sorter::core::pipeline::Pipeline;
use screenshot_sorter::core::sorter::SortDirs;
use screenshot_sorter::SorterError;
use std::fs;
use std::path::Path;

/// iMessage send-bubble blue
const BUBBLE_BLUE: [u8; 3] = [0x19, 0x82, 0xFC];

fn write_uniform_png(dir: &Path, name: &str, rgb: [u8; 3]) {
    let img = ImageBuffer::from_pixel(120, 120, Rgb(rgb));
    DynamicImage::ImageRgb8(img).save(dir.join(name)).unwrap();
}

/// A 100x100 image that looks like a message thread: white background with
/// a band of bubble blue covering 10% of the pixels.
fn write_chat_like_png(dir: &Path, name: &str) {
    let img = ImageBuffer::from_fn(100, 100, |_, y| {
        if (50..60).contains(&y) {
            Rgb(BUBBLE_BLUE)
        } else {
            Rgb([255, 255, 255])
        }
    });
    DynamicImage::ImageRgb8(img).save(dir.join(name)).unwrap();
}

fn pipeline_for(temp: &TempDir) -> Pipeline {
    Pipeline::builder()
        .source_dir(temp.path().to_path_buf())
        .dirs(SortDirs::relative_to(temp.path()))
        .build()
}

#[test]
fn empty_directory_creates_destinations_and_does_nothing_else() {
    let temp = TempDir::new().unwrap();

    let result = pipeline_for(&temp).run().unwrap();

    assert!(result.reports.is_empty());
    temp.child("detected-screenshots").assert(predicate::path::is_dir());
    temp.child("undetected").assert(predicate::path::is_dir());
}

#[test]
fn chat_like_image_is_detected_by_the_standard_rule() {
    let temp = TempDir::new().unwrap();
    write_chat_like_png(temp.path(), "conversation.png");

    let result = pipeline_for(&temp).run().unwrap();

    assert_eq!(result.detected, 1);
    temp.child("detected-screenshots/conversation.png")
        .assert(predicate::path::exists());

    let report = &result.reports[0];
    assert!(report.profile.white_grey >= 35.0);
    assert!(report.profile.blue_green >= 8.0);
    assert!(report.profile.other <= 23.0);
    assert!(report
        .to_string()
        .ends_with("Classified as iMessage screenshot."));
}

#[test]
fn all_white_image_is_detected_by_the_high_white_rule() {
    let temp = TempDir::new().unwrap();
    write_uniform_png(temp.path(), "blank.png", [255, 255, 255]);

    let result = pipeline_for(&temp).run().unwrap();

    assert_eq!(result.detected, 1);
    let report = &result.reports[0];
    assert_eq!(report.profile.white_grey, 100.0);
    assert_eq!(report.profile.blue_green, 0.0);
    assert_eq!(report.profile.other, 0.0);
    assert_eq!(
        report.to_string(),
        "File: blank.png\n\
         White/Grey %: 100.00\n\
         Blue/Green %: 0.00\n\
         Other Colors %: 0.00\n\
         Classified as iMessage screenshot (high white/grey percentage)."
    );
}

#[test]
fn colorful_photo_lands_in_undetected() {
    let temp = TempDir::new().unwrap();
    write_uniform_png(temp.path(), "sunset.jpg", [230, 60, 20]);

    let result = pipeline_for(&temp).run().unwrap();

    assert_eq!(result.detected, 0);
    assert_eq!(result.undetected, 1);
    temp.child("undetected/sunset.jpg")
        .assert(predicate::path::exists());
    temp.child("detected-screenshots/sunset.jpg")
        .assert(predicate::path::missing());
}

#[test]
fn source_files_are_copied_not_moved() {
    let temp = TempDir::new().unwrap();
    write_uniform_png(temp.path(), "blank.png", [255, 255, 255]);

    pipeline_for(&temp).run().unwrap();

    temp.child("blank.png").assert(predicate::path::exists());
    let original = fs::read(temp.path().join("blank.png")).unwrap();
    let copy = fs::read(temp.path().join("detected-screenshots/blank.png")).unwrap();
    assert_eq!(original, copy);
}

#[test]
fn existing_destination_file_is_overwritten() {
    let temp = TempDir::new().unwrap();
    write_uniform_png(temp.path(), "blank.png", [255, 255, 255]);

    let dirs = SortDirs::relative_to(temp.path());
    dirs.prepare().unwrap();
    fs::write(dirs.detected.join("blank.png"), b"stale bytes").unwrap();

    pipeline_for(&temp).run().unwrap();

    let copy = fs::read(dirs.detected.join("blank.png")).unwrap();
    assert_ne!(copy, b"stale bytes");
}

#[test]
fn mixed_directory_is_split_in_file_order() {
    let temp = TempDir::new().unwrap();
    write_uniform_png(temp.path(), "z_photo.jpeg", [230, 60, 20]);
    write_chat_like_png(temp.path(), "a_chat.png");
    write_uniform_png(temp.path(), "m_blank.png", [255, 255, 255]);

    let result = pipeline_for(&temp).run().unwrap();

    assert_eq!(result.detected, 2);
    assert_eq!(result.undetected, 1);

    let names: Vec<_> = result
        .reports
        .iter()
        .map(|r| r.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["a_chat.png", "m_blank.png", "z_photo.jpeg"]);
}

#[test]
fn uppercase_extensions_are_skipped() {
    let temp = TempDir::new().unwrap();
    write_uniform_png(temp.path(), "blank.png", [255, 255, 255]);
    // Same content, uppercase extension: not part of the accepted suffix set
    fs::copy(temp.path().join("blank.png"), temp.path().join("loud.PNG")).unwrap();

    let result = pipeline_for(&temp).run().unwrap();

    assert_eq!(result.reports.len(), 1);
    temp.child("detected-screenshots/loud.PNG")
        .assert(predicate::path::missing());
    temp.child("undetected/loud.PNG")
        .assert(predicate::path::missing());
}

#[test]
fn undecodable_file_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    write_uniform_png(temp.path(), "fine.png", [255, 255, 255]);
    fs::write(temp.path().join("broken.jpg"), b"definitely not a jpeg").unwrap();

    let result = pipeline_for(&temp).run();

    assert!(matches!(result, Err(SorterError::Classify(_))));
}

#[test]
fn nonexistent_source_directory_is_a_scan_error() {
    let temp = TempDir::new().unwrap();

    let pipeline = Pipeline::builder()
        .source_dir(temp.path().join("does-not-exist"))
        .dirs(SortDirs::relative_to(temp.path()))
        .build();

    let result = pipeline.run();
    assert!(matches!(result, Err(SorterError::Scan(_))));
}

#[test]
fn custom_raster_size_still_classifies_correctly() {
    let temp = TempDir::new().unwrap();
    write_uniform_png(temp.path(), "blank.png", [255, 255, 255]);

    let pipeline = Pipeline::builder()
        .source_dir(temp.path().to_path_buf())
        .dirs(SortDirs::relative_to(temp.path()))
        .resize_to(TargetSize::square(20))
        .build();

    let result = pipeline.run().unwrap();

    assert_eq!(result.detected, 1);
    assert_eq!(result.reports[0].profile.white_grey, 100.0);
}
