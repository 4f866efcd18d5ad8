use super::types::Segment;
use serde::{Serialize, Serializer, ser::SerializeStruct};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub changes: usize,
    pub unchanged: usize,
    pub total: usize,
}

impl DiffStats {
    /// Count segments by kind
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut stats = DiffStats::default();

        for segment in segments {
            match segment {
                Segment::Equal { .. } => stats.unchanged += 1,
                Segment::Insert { .. } => stats.additions += 1,
                Segment::Delete { .. } => stats.deletions += 1,
                Segment::Replace { .. } => stats.changes += 1,
            }
        }
        stats.total = segments.len();

        stats
    }

    /// Share of equal segments as a rounded percentage; 0 for an empty diff.
    ///
    /// 100 is reserved for diffs without a single change.
    pub fn similarity(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let ratio = self.unchanged as f64 / self.total as f64;
        let percent = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;
        if self.has_changes() {
            percent.min(99)
        } else {
            percent
        }
    }

    pub fn has_changes(&self) -> bool {
        self.unchanged < self.total
    }
}

impl Serialize for DiffStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DiffStats", 6)?;
        state.serialize_field("additions", &self.additions)?;
        state.serialize_field("deletions", &self.deletions)?;
        state.serialize_field("changes", &self.changes)?;
        state.serialize_field("unchanged", &self.unchanged)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("similarity", &self.similarity())?;
        state.end()
    }
}
