//! Plain engine: fetch, decode, extract and persist.
mod decode;
mod extract;
mod fetch;
mod persist;
mod pipeline;
mod sink;
mod types;

pub use decode::{decode_html, DecodedHtml};
pub use extract::{extract_text, ExtractError, Extractor, SelectorExtractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{write_text_file, AtomicFileWriter, PersistError};
pub use pipeline::{make_plain, PlainError};
pub use sink::{EventSink, LogSink};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, Stage};
