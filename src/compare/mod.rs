//! Word-level text comparison
//!
//! Texts are split into word and whitespace tokens, aligned by a greedy
//! lookahead pass (or Myers on request), and reduced to statistics.

mod diff;
mod stats;
mod tokenize;
mod types;

use serde::Serialize;

pub use diff::{Algorithm, CompareOptions, compare, compare_with};
pub use stats::DiffStats;
pub use tokenize::{is_whitespace_token, tokenize};
pub use types::{Segment, SegmentKind, modified_text, original_text};

/// Both source texts together with their diff and its statistics
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    #[serde(skip)]
    pub original: String,
    #[serde(skip)]
    pub modified: String,
    pub segments: Vec<Segment>,
    pub stats: DiffStats,
}

impl Comparison {
    pub fn new(
        original: impl Into<String>,
        modified: impl Into<String>,
        options: &CompareOptions,
    ) -> Self {
        let original = original.into();
        let modified = modified.into();
        let segments = compare_with(&original, &modified, options);
        let stats = DiffStats::from_segments(&segments);

        Self {
            original,
            modified,
            segments,
            stats,
        }
    }

    pub fn similarity(&self) -> u8 {
        self.stats.similarity()
    }

    pub fn is_identical(&self) -> bool {
        !self.stats.has_changes()
    }
}
