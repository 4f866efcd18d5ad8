//! Plain-text comparison reports
//!
//! Segments are written as one stream with a prefix marker per kind:
//! nothing for equal text, `+` for insertions, `-` for deletions and `~`
//! (followed by the new value) for replacements.

use crate::compare::{Comparison, DiffStats, Segment};
use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const REPORT_TITLE: &str = "Text Comparison Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Append both source texts after the differences
    #[serde(default = "default_true")]
    pub include_sources: bool,

    /// Write the statistics block
    #[serde(default = "default_true")]
    pub include_stats: bool,

    /// Write a "Generated:" line under the title
    #[serde(default = "default_true")]
    pub include_timestamp: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_sources: true,
            include_stats: true,
            include_timestamp: true,
        }
    }
}

/// Concatenate segments with their prefix markers
pub fn export_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Equal { value } => out.push_str(value),
            Segment::Insert { value } => {
                out.push('+');
                out.push_str(value);
            }
            Segment::Delete { value } => {
                out.push('-');
                out.push_str(value);
            }
            Segment::Replace { new_value, .. } => {
                out.push('~');
                out.push_str(new_value);
            }
        }
    }
    out
}

/// Append the "Additions/Deletions/Changes/Similarity" lines
pub fn write_stats(out: &mut String, stats: &DiffStats) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "Additions: {}", stats.additions);
    let _ = writeln!(out, "Deletions: {}", stats.deletions);
    let _ = writeln!(out, "Changes: {}", stats.changes);
    let _ = writeln!(out, "Similarity: {}%", stats.similarity());
}

/// Build the full report for a comparison
pub fn export_report<Tz>(
    comparison: &Comparison,
    options: &ExportOptions,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{REPORT_TITLE}");
    if options.include_timestamp {
        let _ = writeln!(
            out,
            "Generated: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, false)
        );
    }
    out.push('\n');

    if options.include_stats {
        let _ = writeln!(out, "Statistics:");
        write_stats(&mut out, &comparison.stats);
        out.push('\n');
    }

    let _ = writeln!(out, "Differences:");
    let _ = writeln!(out, "{}", export_segments(&comparison.segments));

    if options.include_sources {
        out.push('\n');
        let _ = writeln!(out, "Original Text:");
        let _ = writeln!(out, "{}", comparison.original);
        out.push('\n');
        let _ = writeln!(out, "Modified Text:");
        let _ = writeln!(out, "{}", comparison.modified);
    }

    out
}
