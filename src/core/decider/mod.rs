//! # Decider Module
//!
//! Applies the tuned threshold rule to a [`ColorProfile`] and renders the
//! per-file diagnostic block.
//!
//! The rule set, comparison operators and message text are part of the
//! tuned contract: downstream tooling scrapes the diagnostic output, so the
//! field order, 2-decimal rounding and exact wording must not change.

use crate::core::classifier::ColorProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard rule: mostly white with a visible share of bubble colors and
/// little of anything else.
pub const STANDARD_MIN_WHITE_GREY: f64 = 35.0;
pub const STANDARD_MIN_BLUE_GREEN: f64 = 8.0;
pub const STANDARD_MAX_OTHER: f64 = 23.0;

/// High-white override: an almost entirely white/grey image qualifies even
/// without visible bubble colors (short conversations, empty threads).
pub const HIGH_WHITE_MIN_WHITE_GREY: f64 = 70.0;
pub const HIGH_WHITE_MAX_OTHER: f64 = 20.0;

/// Classification outcome for one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Matched the standard rule
    Standard,
    /// Matched the high-white override rule
    HighWhite,
    /// Matched neither rule
    NotScreenshot,
}

impl Verdict {
    /// Whether this verdict means "iMessage screenshot"
    pub fn is_screenshot(&self) -> bool {
        !matches!(self, Verdict::NotScreenshot)
    }

    /// The diagnostic message for this verdict. Exact text is load-bearing.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Standard => "Classified as iMessage screenshot.",
            Verdict::HighWhite => {
                "Classified as iMessage screenshot (high white/grey percentage)."
            }
            Verdict::NotScreenshot => "Classified as not an iMessage screenshot.",
        }
    }
}

/// Decide whether a color profile looks like an iMessage screenshot.
///
/// Rules are evaluated in order and the first match wins. The comparison
/// operators (>= vs >) are part of the tuned contract.
pub fn decide(profile: &ColorProfile) -> Verdict {
    if profile.white_grey >= STANDARD_MIN_WHITE_GREY
        && profile.blue_green >= STANDARD_MIN_BLUE_GREEN
        && profile.other <= STANDARD_MAX_OTHER
    {
        Verdict::Standard
    } else if profile.white_grey > HIGH_WHITE_MIN_WHITE_GREY
        && profile.other <= HIGH_WHITE_MAX_OTHER
    {
        Verdict::HighWhite
    } else {
        Verdict::NotScreenshot
    }
}

/// Per-file classification report.
///
/// `Display` renders the diagnostic block scraped by downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file_name: String,
    pub profile: ColorProfile,
    pub verdict: Verdict,
}

impl FileReport {
    /// Build a report by deciding on the given profile
    pub fn new(file_name: impl Into<String>, profile: ColorProfile) -> Self {
        let verdict = decide(&profile);
        Self {
            file_name: file_name.into(),
            profile,
            verdict,
        }
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.file_name)?;
        writeln!(f, "White/Grey %: {:.2}", self.profile.white_grey)?;
        writeln!(f, "Blue/Green %: {:.2}", self.profile.blue_green)?;
        writeln!(f, "Other Colors %: {:.2}", self.profile.other)?;
        write!(f, "{}", self.verdict.message())
    }
}
