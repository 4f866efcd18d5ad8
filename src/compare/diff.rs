use super::tokenize::tokenize;
use super::types::Segment;
use crate::constant::DEFAULT_LOOKAHEAD;
use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use tracing::debug;

/// Alignment strategy used by [`compare_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Single pass with bounded lookahead; produces replacements
    #[default]
    Greedy,
    /// Minimal edit script; never produces replacements
    Myers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Tokens scanned on the opposite side at a mismatch
    pub lookahead: usize,
    pub algorithm: Algorithm,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            algorithm: Algorithm::default(),
        }
    }
}

impl CompareOptions {
    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Compare two texts with the default options
pub fn compare(text_a: &str, text_b: &str) -> Vec<Segment> {
    compare_with(text_a, text_b, &CompareOptions::default())
}

/// Compare two texts word by word, keeping whitespace runs as tokens
pub fn compare_with(text_a: &str, text_b: &str, options: &CompareOptions) -> Vec<Segment> {
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);

    let segments = match options.algorithm {
        Algorithm::Greedy => greedy_diff(&tokens_a, &tokens_b, options.lookahead),
        Algorithm::Myers => myers_diff(&tokens_a, &tokens_b),
    };

    debug!(
        algorithm = ?options.algorithm,
        lookahead = options.lookahead,
        tokens_a = tokens_a.len(),
        tokens_b = tokens_b.len(),
        segments = segments.len(),
        "compared texts"
    );

    segments
}

/// Offset of `needle` within the next `window` tokens of `haystack` from `start`
fn find_within(haystack: &[&str], start: usize, window: usize, needle: &str) -> Option<usize> {
    let end = start.saturating_add(window).min(haystack.len());
    haystack
        .get(start..end)?
        .iter()
        .position(|token| *token == needle)
}

/// Greedy two-pointer alignment.
///
/// On a mismatch the current token of each side is searched for in the
/// other side's lookahead window. A hit on the modified side (that is not
/// further away than the hit on the original side) means the modified text
/// is ahead, so its token is an insertion; a hit only on the original side
/// makes the original token a deletion; no hit at all pairs the two tokens
/// as a replacement.
fn greedy_diff(a: &[&str], b: &[&str], lookahead: usize) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(a.len().max(b.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() || j < b.len() {
        if i >= a.len() {
            segments.push(Segment::insert(b[j]));
            j += 1;
        } else if j >= b.len() {
            segments.push(Segment::delete(a[i]));
            i += 1;
        } else if a[i] == b[j] {
            segments.push(Segment::equal(a[i]));
            i += 1;
            j += 1;
        } else {
            let a_in_b = find_within(b, j, lookahead, a[i]);
            let b_in_a = find_within(a, i, lookahead, b[j]);

            match (a_in_b, b_in_a) {
                (Some(_), None) => {
                    segments.push(Segment::insert(b[j]));
                    j += 1;
                }
                (Some(offset_b), Some(offset_a)) if offset_b < offset_a => {
                    segments.push(Segment::insert(b[j]));
                    j += 1;
                }
                (_, Some(_)) => {
                    segments.push(Segment::delete(a[i]));
                    i += 1;
                }
                (None, None) => {
                    segments.push(Segment::replace(a[i], b[j]));
                    i += 1;
                    j += 1;
                }
            }
        }
    }

    segments
}

fn myers_diff(a: &[&str], b: &[&str]) -> Vec<Segment> {
    let diff = TextDiff::configure()
        .algorithm(similar::Algorithm::Myers)
        .diff_slices(a, b);

    diff.iter_all_changes()
        .map(|change| match change.tag() {
            ChangeTag::Equal => Segment::equal(change.value()),
            ChangeTag::Insert => Segment::insert(change.value()),
            ChangeTag::Delete => Segment::delete(change.value()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::stats::DiffStats;
    use crate::compare::types::{SegmentKind, modified_text, original_text};

    fn kinds(segments: &[Segment]) -> Vec<SegmentKind> {
        segments.iter().map(Segment::kind).collect()
    }

    #[test]
    fn replaced_word_between_equal_context() {
        let segments = compare("The cat sat", "The dog sat");
        assert_eq!(
            segments,
            vec![
                Segment::equal("The"),
                Segment::equal(" "),
                Segment::replace("cat", "dog"),
                Segment::equal(" "),
                Segment::equal("sat"),
            ]
        );

        let stats = DiffStats::from_segments(&segments);
        assert_eq!(stats.additions, 0);
        assert_eq!(stats.deletions, 0);
        assert_eq!(stats.changes, 1);
    }

    #[test]
    fn inserted_word_found_through_lookahead() {
        let segments = compare("Hello world", "Hello there world");
        assert_eq!(
            segments,
            vec![
                Segment::equal("Hello"),
                Segment::equal(" "),
                Segment::insert("there"),
                Segment::insert(" "),
                Segment::equal("world"),
            ]
        );

        let stats = DiffStats::from_segments(&segments);
        assert_eq!(stats.additions, 2);
        assert_eq!(stats.deletions, 0);
    }

    #[test]
    fn removed_word_becomes_deletes() {
        let segments = compare("Hello there world", "Hello world");
        assert_eq!(
            kinds(&segments),
            vec![
                SegmentKind::Equal,
                SegmentKind::Equal,
                SegmentKind::Delete,
                SegmentKind::Delete,
                SegmentKind::Equal,
            ]
        );
        assert_eq!(segments[2], Segment::delete("there"));
    }

    #[test]
    fn empty_inputs() {
        assert!(compare("", "").is_empty());

        let inserted = compare("", "hello world");
        assert_eq!(
            inserted,
            vec![
                Segment::insert("hello"),
                Segment::insert(" "),
                Segment::insert("world"),
            ]
        );

        let deleted = compare("hello world", "");
        assert_eq!(
            deleted,
            vec![
                Segment::delete("hello"),
                Segment::delete(" "),
                Segment::delete("world"),
            ]
        );
    }

    #[test]
    fn identical_text_is_all_equal() {
        let text = "  Same words,\n\tsame  spacing. ";
        let segments = compare(text, text);
        assert!(segments.iter().all(|s| s.kind() == SegmentKind::Equal));
        let values: Vec<&str> = segments.iter().map(Segment::value).collect();
        assert_eq!(values, tokenize(text));
    }

    #[test]
    fn whitespace_runs_are_not_normalized() {
        let segments = compare("a  b", "a b");
        assert_eq!(
            segments,
            vec![
                Segment::equal("a"),
                Segment::replace("  ", " "),
                Segment::equal("b"),
            ]
        );
    }

    #[test]
    fn swapped_words_tie_resolves_to_delete() {
        // "one" sits two tokens ahead in B and "two" two tokens ahead in A
        let segments = compare("one two", "two one");
        assert_eq!(
            segments,
            vec![
                Segment::delete("one"),
                Segment::delete(" "),
                Segment::equal("two"),
                Segment::insert(" "),
                Segment::insert("one"),
            ]
        );
    }

    #[test]
    fn nearer_match_on_modified_side_inserts() {
        let a = ["x", "q", "r", "y"];
        let b = ["y", "x"];
        let segments = greedy_diff(&a, &b, 10);
        assert_eq!(segments[0], Segment::insert("y"));
        assert_eq!(segments[1], Segment::equal("x"));
    }

    #[test]
    fn equal_offsets_prefer_delete() {
        let a = ["x", "q", "y"];
        let b = ["y", "p", "x"];
        let segments = greedy_diff(&a, &b, 10);
        assert_eq!(segments[0], Segment::delete("x"));
    }

    #[test]
    fn zero_lookahead_replaces_every_mismatch() {
        let options = CompareOptions::default().with_lookahead(0);
        let segments = compare_with("Hello world", "Hello there world", &options);
        assert_eq!(
            segments,
            vec![
                Segment::equal("Hello"),
                Segment::equal(" "),
                Segment::replace("world", "there"),
                Segment::insert(" "),
                Segment::insert("world"),
            ]
        );
    }

    #[test]
    fn match_beyond_window_is_not_seen() {
        let original = "end";
        let modified = "a b c end";
        // "end" sits at offset 6 in the modified tokens
        let narrow = compare_with(original, modified, &CompareOptions::default().with_lookahead(6));
        assert_eq!(narrow[0], Segment::replace("end", "a"));

        let wide = compare_with(original, modified, &CompareOptions::default().with_lookahead(7));
        assert!(wide[..6].iter().all(|s| s.kind() == SegmentKind::Insert));
        assert_eq!(wide[6], Segment::equal("end"));
    }

    #[test]
    fn segments_rebuild_both_sides() {
        let cases = [
            ("The quick brown fox", "The slow brown dog jumps"),
            ("a b c d e f", "f e d c b a"),
            ("  leading", "trailing  "),
            ("line one\nline two\n", "line one\nline 2\nline three\n"),
            ("x x x x", "x y x"),
            ("", "only new"),
        ];

        for (a, b) in cases {
            for lookahead in [0, 1, 3, 10] {
                let options = CompareOptions::default().with_lookahead(lookahead);
                let segments = compare_with(a, b, &options);
                assert_eq!(original_text(&segments), a, "original for {a:?} / {b:?}");
                assert_eq!(modified_text(&segments), b, "modified for {a:?} / {b:?}");
                assert!(segments.len() <= tokenize(a).len() + tokenize(b).len());
            }
        }
    }

    #[test]
    fn myers_never_replaces() {
        let options = CompareOptions::default().with_algorithm(Algorithm::Myers);
        let segments = compare_with("The cat sat", "The dog sat", &options);
        assert!(segments.iter().all(|s| s.kind() != SegmentKind::Replace));
        assert_eq!(original_text(&segments), "The cat sat");
        assert_eq!(modified_text(&segments), "The dog sat");

        let stats = DiffStats::from_segments(&segments);
        assert_eq!(stats.additions, 1);
        assert_eq!(stats.deletions, 1);
    }
}
