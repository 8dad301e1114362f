use crate::TagKind;

/// One selected element: its classified kind and its flattened text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedElement {
    pub kind: TagKind,
    pub text: String,
}

impl MatchedElement {
    pub fn new(kind: TagKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Formats one element for plaintext output.
///
/// Paragraph line breaks become spaces and headings are uppercased.
/// Any other kind renders as an empty string.
pub fn format_text(element: &MatchedElement) -> String {
    match element.kind {
        TagKind::Paragraph => element.text.replace('\n', " "),
        TagKind::Heading(_) => element.text.to_uppercase(),
        TagKind::Other => String::new(),
    }
}
