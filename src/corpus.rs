use serde_json::Value;
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::models::Document;

/// Read and parse a corpus file. See [`parse_corpus`].
pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let data = std::fs::read_to_string(path)?;
    parse_corpus(&data)
}

/// Parse a JSON array of documents, preserving order.
///
/// Each element is validated on its own so a bad record is reported by
/// position rather than as a bare parse error.
pub fn parse_corpus(data: &str) -> Result<Vec<Document>> {
    let records: Vec<Value> = serde_json::from_str(data)?;
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            serde_json::from_value(record).map_err(|e| SearchError::IndexBuild {
                position,
                reason: e.to_string(),
            })
        })
        .collect()
}
