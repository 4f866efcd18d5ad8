//! Text Compare library
//!
//! Word-level comparison of two texts. Whitespace runs are kept as tokens,
//! so a diff always rebuilds both inputs exactly.
//!
//! ```rust
//! use text_compare::compare::{compare, DiffStats, Segment};
//!
//! let segments = compare("The cat sat", "The dog sat");
//! assert_eq!(segments[2], Segment::replace("cat", "dog"));
//! assert_eq!(DiffStats::from_segments(&segments).changes, 1);
//! ```

pub mod compare;
pub mod config;
pub mod constant;
pub mod export;
pub mod render;
pub mod saver;
