use thiserror::Error;

/// Errors raised by corpus loading, index build and query execution.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query normalizes to zero tokens.
    #[error("Please enter a valid query")]
    InvalidQuery,

    /// `offset` and `limit` do not describe a page: `limit` is zero, or the
    /// page number does not fit in a `usize`.
    #[error("offset {offset} with limit {limit} is not a valid page")]
    InvalidPage { offset: usize, limit: usize },

    /// A corpus element cannot be indexed.
    #[error("cannot index document at position {position}: {reason}")]
    IndexBuild { position: usize, reason: String },

    #[error("failed to read corpus: {0}")]
    CorpusRead(#[from] std::io::Error),

    #[error("corpus is not a JSON array of documents: {0}")]
    CorpusParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
