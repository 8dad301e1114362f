use plain_logging::{plain_debug, plain_error, plain_info, plain_trace, plain_warn};

use crate::{EngineEvent, Stage};

/// Receives stage events from the pipeline.
///
/// Every stage takes the sink as an argument; nothing in the engine writes to
/// the global logger on its own.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::Progress {
                stage: Stage::Fetching,
                bytes: Some(bytes),
                ..
            } => plain_trace!("fetching: {bytes} bytes received"),
            EngineEvent::Progress {
                stage,
                bytes,
                segments,
            } => match (bytes, segments) {
                (_, Some(segments)) => plain_debug!("{stage}: {segments} segments"),
                (Some(bytes), None) => plain_debug!("{stage}: {bytes} bytes"),
                (None, None) => plain_debug!("{stage}"),
            },
            EngineEvent::Fetched {
                original_url,
                final_url,
                status,
                bytes,
            } => {
                if original_url != final_url {
                    plain_info!("{original_url} redirected to {final_url}");
                }
                plain_info!("fetched {final_url}: status {status}, {bytes} bytes");
            }
            EngineEvent::Decoded {
                encoding,
                lossy: true,
            } => plain_warn!("decoding: malformed {encoding} sequences replaced with U+FFFD"),
            EngineEvent::Decoded { encoding, .. } => plain_debug!("decoding: {encoding}"),
            EngineEvent::Failed { stage, message } => plain_error!("{stage} failed: {message}"),
        }
    }
}
