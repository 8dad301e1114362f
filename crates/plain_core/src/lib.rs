//! Plain core: pure tag classification, text formatting and document assembly.
mod document;
mod format;
mod tag;

pub use document::{PlainDocument, SEGMENT_SEPARATOR};
pub use format::{format_text, MatchedElement};
pub use tag::{HeadingLevel, TagKind, TEXT_SELECTOR};
