use plain_core::{MatchedElement, PlainDocument, TagKind, TEXT_SELECTOR};
use scraper::{Html, Selector};
use thiserror::Error;

use crate::{decode_html, EngineEvent, EventSink, FetchOutput, Stage};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("nothing to process: no response was fetched")]
    NothingToProcess,
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> PlainDocument;
}

/// Selects elements with a CSS selector and formats each one by its tag kind.
#[derive(Debug, Clone)]
pub struct SelectorExtractor {
    selector: Selector,
}

impl SelectorExtractor {
    pub fn new(selector: &str) -> Result<Self, ExtractError> {
        let parsed = Selector::parse(selector).map_err(|err| ExtractError::InvalidSelector {
            selector: selector.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { selector: parsed })
    }

    /// Paragraphs and the six heading levels.
    pub fn text_tags() -> Result<Self, ExtractError> {
        Self::new(TEXT_SELECTOR)
    }

    /// Matched elements in document order, classified and flattened.
    pub fn matches(&self, html: &str) -> Vec<MatchedElement> {
        let doc = Html::parse_document(html);
        doc.select(&self.selector)
            .map(|element| {
                let kind = TagKind::classify(element.value().name());
                MatchedElement::new(kind, element.text().collect::<String>())
            })
            .collect()
    }
}

impl Extractor for SelectorExtractor {
    fn extract(&self, html: &str) -> PlainDocument {
        self.matches(html).into_iter().collect()
    }
}

/// Turns a fetched response into plaintext.
///
/// `None` stands for a fetch that produced nothing and fails immediately.
/// The response is consumed here; its buffer is released on every path.
pub fn extract_text(
    response: Option<FetchOutput>,
    extractor: &dyn Extractor,
    sink: &dyn EventSink,
) -> Result<String, ExtractError> {
    let Some(response) = response else {
        return Err(ExtractError::NothingToProcess);
    };

    sink.emit(EngineEvent::Progress {
        stage: Stage::Decoding,
        bytes: Some(response.metadata.byte_len),
        segments: None,
    });
    let decoded = decode_html(&response.bytes, response.metadata.content_type.as_deref());
    drop(response);
    sink.emit(EngineEvent::Decoded {
        encoding: decoded.encoding_label.clone(),
        lossy: decoded.lossy,
    });

    sink.emit(EngineEvent::progress(Stage::Extracting));
    let document = extractor.extract(&decoded.html);
    sink.emit(EngineEvent::Progress {
        stage: Stage::Extracting,
        bytes: None,
        segments: Some(document.len()),
    });

    Ok(document.into_text())
}
