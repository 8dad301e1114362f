use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub lossy: bool,
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset -> chardetng fallback.
///
/// Never fails; bytes that are invalid in the chosen encoding become U+FFFD.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches(['"', '\''].as_ref()))
        } else {
            None
        }
    })
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedHtml {
    let (text, actual, had_errors) = enc.decode(bytes);
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: actual.name().to_string(),
        lossy: had_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_parameter_is_found_in_any_position_and_case() {
        assert_eq!(extract_charset("text/html; charset=utf-8"), Some("utf-8"));
        assert_eq!(extract_charset("text/html;Charset=\"ISO-8859-1\""), Some("ISO-8859-1"));
        assert_eq!(extract_charset("text/html; q=1; CHARSET = 'koi8-r'"), Some("koi8-r"));
        assert_eq!(extract_charset("text/html"), None);
    }

    #[test]
    fn invalid_utf8_under_utf8_label_is_replaced() {
        let decoded = decode_html(b"ok \xff\xfe broken", Some("text/html; charset=utf-8"));
        assert_eq!(decoded.html, "ok \u{FFFD}\u{FFFD} broken");
        assert_eq!(decoded.encoding_label, "UTF-8");
        assert!(decoded.lossy);
    }

    #[test]
    fn clean_input_is_not_lossy() {
        let decoded = decode_html(b"plain ascii", Some("text/html; charset=utf-8"));
        assert_eq!(decoded.html, "plain ascii");
        assert!(!decoded.lossy);
    }
}
