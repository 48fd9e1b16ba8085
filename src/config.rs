use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::search::bm25::Bm25Params;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// JSON array of `{id, message, ...}` documents, loaded once at startup
    pub corpus_path: PathBuf,
    /// Ranking constants
    pub bm25: Bm25Params,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            corpus_path: PathBuf::from("./data/corpus.json"),
            bm25: Bm25Params::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(path) = std::env::var("SEARCH_CORPUS_PATH") {
            config.corpus_path = PathBuf::from(path);
        }
        if let Ok(val) = std::env::var("SEARCH_BM25_K1") {
            if let Ok(v) = val.parse() {
                config.bm25.k1 = v;
            }
        }
        if let Ok(val) = std::env::var("SEARCH_BM25_B") {
            if let Ok(v) = val.parse() {
                config.bm25.b = v;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "127.0.0.1:8000");
        assert_eq!(config.corpus_path, PathBuf::from("./data/corpus.json"));
        assert_eq!(config.bm25.k1, 1.5);
        assert_eq!(config.bm25.b, 0.75);
    }
}
