use std::fmt;

use crate::{format_text, MatchedElement};

/// Separator placed between consecutive segments.
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Formatted segments in document order.
///
/// Every matched element contributes exactly one segment, even when its
/// formatted text is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlainDocument {
    segments: Vec<String>,
}

impl PlainDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: &MatchedElement) {
        self.segments.push(format_text(element));
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_text(self) -> String {
        self.segments.join(SEGMENT_SEPARATOR)
    }
}

impl<'a> FromIterator<&'a MatchedElement> for PlainDocument {
    fn from_iter<I: IntoIterator<Item = &'a MatchedElement>>(iter: I) -> Self {
        let mut document = PlainDocument::new();
        for element in iter {
            document.push(element);
        }
        document
    }
}

impl FromIterator<MatchedElement> for PlainDocument {
    fn from_iter<I: IntoIterator<Item = MatchedElement>>(iter: I) -> Self {
        let mut document = PlainDocument::new();
        for element in iter {
            document.push(&element);
        }
        document
    }
}

impl fmt::Display for PlainDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(SEGMENT_SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
