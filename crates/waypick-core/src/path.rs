use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered hierarchy position, root to leaf.
///
/// Segments are non-empty trimmed strings; the display form joins them with
/// `" > "`. Parsing any string back yields the same path as long as no
/// segment contains `>` or surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UiPath {
    segments: Vec<String>,
}

impl UiPath {
    pub const SEPARATOR: &'static str = " > ";

    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a display string. Never fails; a malformed or blank string
    /// yields an empty path.
    pub fn parse(display: &str) -> Self {
        let segments = display
            .split('>')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Appends a segment. Blank segments are dropped so the no-empty-segment
    /// invariant holds under any caller.
    pub fn push(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return;
        }
        if trimmed.len() == segment.len() {
            self.segments.push(segment);
        } else {
            self.segments.push(trimmed.to_string());
        }
    }

    /// Removes and returns the leaf segment, if any.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }
}

impl fmt::Display for UiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(Self::SEPARATOR))
    }
}

impl<S: Into<String>> FromIterator<S> for UiPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut path = Self::new();
        for segment in iter {
            path.push(segment);
        }
        path
    }
}
