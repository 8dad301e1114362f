use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Decoding,
    Extracting,
    Writing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetching => "fetching",
            Stage::Decoding => "decoding",
            Stage::Extracting => "extracting",
            Stage::Writing => "writing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress {
        stage: Stage,
        bytes: Option<u64>,
        segments: Option<usize>,
    },
    /// A `200 OK` body was read in full.
    Fetched {
        original_url: String,
        final_url: String,
        status: u16,
        bytes: u64,
    },
    Decoded {
        encoding: String,
        lossy: bool,
    },
    Failed {
        stage: Stage,
        message: String,
    },
}

impl EngineEvent {
    pub(crate) fn progress(stage: Stage) -> Self {
        EngineEvent::Progress {
            stage,
            bytes: None,
            segments: None,
        }
    }

    pub(crate) fn fetched(metadata: &FetchMetadata) -> Self {
        EngineEvent::Fetched {
            original_url: metadata.original_url.clone(),
            final_url: metadata.final_url.clone(),
            status: metadata.status,
            bytes: metadata.byte_len,
        }
    }

    pub(crate) fn failed(stage: Stage, message: impl fmt::Display) -> Self {
        EngineEvent::Failed {
            stage,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
