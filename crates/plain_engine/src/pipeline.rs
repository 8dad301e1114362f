use thiserror::Error;

use crate::{
    extract_text, EngineEvent, EventSink, ExtractError, Extractor, FetchError, Fetcher, Stage,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlainError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
}

/// Fetches `url` and returns its plaintext rendering.
///
/// A failed fetch is reported to the sink and extraction still runs on the
/// absent response, so both stages report. The returned error is the fetch
/// failure in that case. `Ok("")` means the page loaded but had no text.
pub async fn make_plain(
    url: &str,
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    sink: &dyn EventSink,
) -> Result<String, PlainError> {
    let (response, fetch_err) = match fetcher.fetch(url, sink).await {
        Ok(response) => {
            sink.emit(EngineEvent::fetched(&response.metadata));
            (Some(response), None)
        }
        Err(err) => {
            sink.emit(EngineEvent::failed(Stage::Fetching, &err));
            (None, Some(err))
        }
    };

    match extract_text(response, extractor, sink) {
        Ok(text) => {
            sink.emit(EngineEvent::progress(Stage::Done));
            Ok(text)
        }
        Err(err) => {
            sink.emit(EngineEvent::failed(Stage::Extracting, &err));
            Err(match fetch_err {
                Some(fetch_err) => PlainError::Fetch(fetch_err),
                None => PlainError::Extract(err),
            })
        }
    }
}
