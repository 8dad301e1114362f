use std::sync::Mutex;

use plain_core::{HeadingLevel, TagKind};
use plain_engine::{
    decode_html, extract_text, EngineEvent, EventSink, ExtractError, Extractor, FetchMetadata,
    FetchOutput, SelectorExtractor,
};
use pretty_assertions::assert_eq;

struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: EngineEvent) {}
}

fn response(body: &[u8], content_type: Option<&str>) -> FetchOutput {
    FetchOutput {
        bytes: body.to_vec(),
        metadata: FetchMetadata {
            original_url: "http://example.test/".to_string(),
            final_url: "http://example.test/".to_string(),
            status: 200,
            content_type: content_type.map(str::to_string),
            byte_len: body.len() as u64,
        },
    }
}

fn extractor() -> SelectorExtractor {
    SelectorExtractor::text_tags().expect("text selector parses")
}

#[test]
fn heading_and_paragraph_render_as_plaintext() {
    let text = extractor().extract("<h1>hi</h1><p>line1\nline2</p>").into_text();
    assert_eq!(text, "HI\n\nline1 line2");
}

#[test]
fn absent_response_is_nothing_to_process() {
    let err = extract_text(None, &extractor(), &NullSink).unwrap_err();
    assert_eq!(err, ExtractError::NothingToProcess);
}

#[test]
fn no_matching_tags_yield_empty_text() {
    let body = b"<html><body><div>just a div</div><span>and a span</span></body></html>";
    let text = extract_text(Some(response(body, Some("text/html"))), &extractor(), &NullSink)
        .expect("extract ok");
    assert_eq!(text, "");
}

#[test]
fn matches_follow_document_order_across_levels() {
    let html = r#"
    <html><body>
        <h2>Second level</h2>
        <div><p>inside div</p></div>
        <h6>deep</h6>
        <ul><li>skipped</li></ul>
        <p>last</p>
    </body></html>
    "#;
    let matches = extractor().matches(html);
    let kinds: Vec<TagKind> = matches.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TagKind::Heading(HeadingLevel::H2),
            TagKind::Paragraph,
            TagKind::Heading(HeadingLevel::H6),
            TagKind::Paragraph,
        ]
    );

    let text = extractor().extract(html).into_text();
    assert_eq!(text, "SECOND LEVEL\n\ninside div\n\nDEEP\n\nlast");
}

#[test]
fn element_text_flattens_descendants() {
    let html = "<p>Some <b>bold</b> and <a href=\"#\">linked\ntext</a>.</p>";
    let text = extractor().extract(html).into_text();
    assert_eq!(text, "Some bold and linked text.");
}

#[test]
fn nested_matches_each_produce_a_segment() {
    let html = "<h1>Title <p>inner</p></h1>";
    let doc = extractor().extract(html);
    // The heading's own text includes the nested paragraph.
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.into_text(), "TITLE INNER\n\ninner");
}

#[test]
fn empty_paragraph_keeps_its_segment() {
    let doc = extractor().extract("<p>a</p><p></p><p>b</p>");
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.into_text(), "a\n\n\n\nb");
}

#[test]
fn latin1_body_is_decoded_before_extraction() {
    let body = b"<p>caf\xe9</p><h3>na\xefve</h3>";
    let text = extract_text(
        Some(response(body, Some("text/html; charset=ISO-8859-1"))),
        &extractor(),
        &NullSink,
    )
    .expect("extract ok");
    assert_eq!(text, "café\n\nNAÏVE");
}

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl EventSink for RecordingSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[test]
fn stray_bytes_are_replaced_and_the_page_survives() {
    let body = b"<h1>Title</h1><p>A long good paragraph.</p><p>footer \x96 dash</p>";
    let sink = RecordingSink::default();
    let text = extract_text(
        Some(response(body, Some("text/html; charset=UTF-8"))),
        &extractor(),
        &sink,
    )
    .expect("extract ok");

    assert_eq!(
        text,
        "TITLE\n\nA long good paragraph.\n\nfooter \u{FFFD} dash"
    );
    let events = sink.events.lock().unwrap();
    assert!(events.contains(&EngineEvent::Decoded {
        encoding: "UTF-8".to_string(),
        lossy: true,
    }));
}

#[test]
fn decode_handles_utf8_bom() {
    let decoded = decode_html(b"\xEF\xBB\xBFhello", Some("text/html"));
    assert_eq!(decoded.html, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
    assert!(!decoded.lossy);
}

#[test]
fn custom_selector_is_validated() {
    let err = SelectorExtractor::new("p[").unwrap_err();
    assert!(matches!(err, ExtractError::InvalidSelector { .. }));

    let only_paragraphs = SelectorExtractor::new("p").unwrap();
    assert_eq!(
        only_paragraphs.extract("<h1>x</h1><p>y</p>").into_text(),
        "y"
    );
}
