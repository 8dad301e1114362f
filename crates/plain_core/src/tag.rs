/// CSS selector for the elements that carry readable text.
pub const TEXT_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn from_tag(name: &str) -> Option<Self> {
        let level = match name.to_ascii_lowercase().as_str() {
            "h1" => HeadingLevel::H1,
            "h2" => HeadingLevel::H2,
            "h3" => HeadingLevel::H3,
            "h4" => HeadingLevel::H4,
            "h5" => HeadingLevel::H5,
            "h6" => HeadingLevel::H6,
            _ => return None,
        };
        Some(level)
    }
}

/// Kind of a selected element, decided once when the element is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Paragraph,
    Heading(HeadingLevel),
    /// Anything the text selector should never produce.
    Other,
}

impl TagKind {
    /// Classifies an element by its local tag name. Case-insensitive.
    pub fn classify(name: &str) -> Self {
        if name.eq_ignore_ascii_case("p") {
            return TagKind::Paragraph;
        }
        match HeadingLevel::from_tag(name) {
            Some(level) => TagKind::Heading(level),
            None => TagKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_selector_tag() {
        assert_eq!(TagKind::classify("p"), TagKind::Paragraph);
        let expected = [
            ("h1", HeadingLevel::H1),
            ("h2", HeadingLevel::H2),
            ("h3", HeadingLevel::H3),
            ("h4", HeadingLevel::H4),
            ("h5", HeadingLevel::H5),
            ("h6", HeadingLevel::H6),
        ];
        for (tag, level) in expected {
            assert_eq!(TagKind::classify(tag), TagKind::Heading(level));
        }
    }

    #[test]
    fn unknown_tags_are_other() {
        assert_eq!(TagKind::classify("div"), TagKind::Other);
        assert_eq!(TagKind::classify("h7"), TagKind::Other);
        assert_eq!(TagKind::classify("pre"), TagKind::Other);
        assert_eq!(TagKind::classify(""), TagKind::Other);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(TagKind::classify("P"), TagKind::Paragraph);
        assert_eq!(TagKind::classify("H2"), TagKind::Heading(HeadingLevel::H2));
    }
}
