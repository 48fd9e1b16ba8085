use anyhow::Context;
use std::sync::Arc;

use crate::config::Config;
use crate::corpus::load_corpus;
use crate::search::SearchEngine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<SearchEngine>,
}

impl AppState {
    /// Load the corpus and build the index. Any failure here is fatal: the
    /// server must not start with a missing or partial index.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let corpus = load_corpus(&config.corpus_path).with_context(|| {
            format!("Failed to load corpus from {}", config.corpus_path.display())
        })?;
        tracing::info!("Loaded {} documents", corpus.len());

        let engine =
            SearchEngine::build(corpus, config.bm25).context("Failed to build search index")?;

        Ok(Self::with_engine(config, engine))
    }

    pub fn with_engine(config: Config, engine: SearchEngine) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
        }
    }
}
