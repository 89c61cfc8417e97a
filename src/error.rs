use thiserror::Error;

/// Everything that can abort the pipeline. No retries, no partial results:
/// any of these bubbles up to main and terminates the run.
#[derive(Debug, Error)]
pub enum AnalystError {
    #[error("database error: {0}")]
    Db(#[from] postgres::Error),

    #[error("malformed key_events_json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed key event timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
