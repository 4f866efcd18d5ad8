use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

/// One classified unit of a diff result.
///
/// Serialised records carry `value` for every kind; replacements also carry
/// `oldValue` and `newValue`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Token present unchanged on both sides
    Equal { value: String },
    /// Token only present in the modified text
    Insert { value: String },
    /// Token only present in the original text
    Delete { value: String },
    /// Token of the original paired with a differing token of the modified text
    Replace {
        #[serde(rename = "oldValue")]
        old_value: String,
        #[serde(rename = "newValue")]
        new_value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Equal,
    Insert,
    Delete,
    Replace,
}

impl Segment {
    pub fn equal(value: impl Into<String>) -> Self {
        Segment::Equal {
            value: value.into(),
        }
    }

    pub fn insert(value: impl Into<String>) -> Self {
        Segment::Insert {
            value: value.into(),
        }
    }

    pub fn delete(value: impl Into<String>) -> Self {
        Segment::Delete {
            value: value.into(),
        }
    }

    pub fn replace(old_value: impl Into<String>, new_value: impl Into<String>) -> Self {
        Segment::Replace {
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Equal { .. } => SegmentKind::Equal,
            Segment::Insert { .. } => SegmentKind::Insert,
            Segment::Delete { .. } => SegmentKind::Delete,
            Segment::Replace { .. } => SegmentKind::Replace,
        }
    }

    /// Display value: the new side for a replacement
    pub fn value(&self) -> &str {
        match self {
            Segment::Equal { value } | Segment::Insert { value } | Segment::Delete { value } => {
                value
            }
            Segment::Replace { new_value, .. } => new_value,
        }
    }

    /// Contribution to the original text, if any
    pub fn original(&self) -> Option<&str> {
        match self {
            Segment::Equal { value } | Segment::Delete { value } => Some(value),
            Segment::Replace { old_value, .. } => Some(old_value),
            Segment::Insert { .. } => None,
        }
    }

    /// Contribution to the modified text, if any
    pub fn modified(&self) -> Option<&str> {
        match self {
            Segment::Equal { value } | Segment::Insert { value } => Some(value),
            Segment::Replace { new_value, .. } => Some(new_value),
            Segment::Delete { .. } => None,
        }
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Segment::Replace {
                old_value,
                new_value,
            } => {
                let mut state = serializer.serialize_struct("Segment", 4)?;
                state.serialize_field("type", "replace")?;
                state.serialize_field("value", new_value)?;
                state.serialize_field("oldValue", old_value)?;
                state.serialize_field("newValue", new_value)?;
                state.end()
            }
            other => {
                let kind = match other.kind() {
                    SegmentKind::Equal => "equal",
                    SegmentKind::Insert => "insert",
                    _ => "delete",
                };
                let mut state = serializer.serialize_struct("Segment", 2)?;
                state.serialize_field("type", kind)?;
                state.serialize_field("value", other.value())?;
                state.end()
            }
        }
    }
}

/// Rebuild the original text from a segment list
pub fn original_text(segments: &[Segment]) -> String {
    segments.iter().filter_map(Segment::original).collect()
}

/// Rebuild the modified text from a segment list
pub fn modified_text(segments: &[Segment]) -> String {
    segments.iter().filter_map(Segment::modified).collect()
}
