//! Dot-delimited paths such as `body.contents.0.text`.

use std::borrow::Cow;
use std::fmt;

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Array index (also usable as an object key)
    Index(usize),

    /// Object field name
    Key(String),
}

impl Segment {
    /// A segment is an index only in canonical form, so `"01"` stays a key
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<usize>() {
            Ok(index) if index.to_string() == raw => Segment::Index(index),
            _ => Segment::Key(raw.to_string()),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// Field name used when this segment addresses an object
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Segment::Index(index) => Cow::Owned(index.to_string()),
            Segment::Key(key) => Cow::Borrowed(key.as_str()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(index) => write!(f, "{}", index),
            Segment::Key(key) => f.write_str(key),
        }
    }
}

/// Parsed path. The empty path addresses the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::root();
        }

        Self {
            segments: raw.split('.').map(Segment::parse).collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the parent path and the final segment
    pub fn split_last(&self) -> Option<(&[Segment], &Segment)> {
        self.segments
            .split_last()
            .map(|(last, parent)| (parent, last))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
