use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the notice preparation pipeline.
///
/// Every variant is fatal for the run: the pipeline either completes and
/// emits one output document or aborts before writing anything. Lookup
/// misses against the reference maps are deliberately not represented
/// here; unknown names pass through unchanged.
#[derive(Debug, Error)]
pub enum NoticeError {
    /// The dataset's header row disagrees with the configured column order.
    #[error("column mismatch; expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A required input path does not exist or is not a file.
    #[error("input file {0} does not exist")]
    MissingInput(PathBuf),

    /// A date value matched neither `YYYY-MM-DD` nor `Mon D, YYYY`.
    #[error("unparseable date {value:?}")]
    DateParse { value: String },

    /// A row's content is malformed beyond repair (blank identifier,
    /// event dated before birth). There is no partial-row recovery.
    #[error("bad record for client {client_id:?}: {reason}")]
    Record { client_id: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, NoticeError>;
