//! Search pipeline over an in-memory corpus.
//!
//! - [`normalize`] - lowercase, punctuation strip, diacritic fold, Porter stem
//! - [`stemmer`] - Porter suffix stripping
//! - [`index`] - inverted index build and AND matching
//! - [`bm25`] - candidate-scoped BM25 ranking
//! - [`paginate`] - page slicing and navigation links

pub mod bm25;
pub mod index;
pub mod normalize;
pub mod paginate;
pub mod stemmer;

use crate::error::Result;
use crate::models::{Document, SearchResponse};

use self::bm25::{Bm25Params, Candidate};
use self::index::InvertedIndex;
use self::paginate::{empty_page, paginate, Page};

/// Corpus and inverted index, built once and read-only afterwards.
///
/// Shared behind an `Arc` by every request; no query mutates it, so any
/// number of searches may run in parallel.
#[derive(Debug)]
pub struct SearchEngine {
    corpus: Vec<Document>,
    index: InvertedIndex,
    params: Bm25Params,
}

impl SearchEngine {
    /// Index `corpus`. Fails if any document cannot be indexed; no partially
    /// built engine is ever returned.
    pub fn build(corpus: Vec<Document>, params: Bm25Params) -> Result<Self> {
        let index = InvertedIndex::build(&corpus)?;
        tracing::info!(
            "Indexed {} documents ({} distinct terms)",
            index.doc_count(),
            index.vocabulary_size()
        );
        Ok(Self {
            corpus,
            index,
            params,
        })
    }

    pub fn corpus(&self) -> &[Document] {
        &self.corpus
    }

    /// Match and rank, returning the full ordered result set.
    pub fn ranked(&self, query: &str) -> Result<Vec<&Document>> {
        let terms = normalize::tokens(query);
        let positions = self.index.match_tokens(&terms)?;
        Ok(self.rank_positions(&terms, &positions))
    }

    fn rank_positions(&self, terms: &[String], positions: &[usize]) -> Vec<&Document> {
        let candidates: Vec<Candidate<'_>> = positions
            .iter()
            .map(|&p| Candidate {
                document: &self.corpus[p],
                tokens: self.index.tokens_at(p),
            })
            .collect();

        bm25::rank(&self.params, terms, &candidates)
            .into_iter()
            .map(|hit| hit.document)
            .collect()
    }

    /// Run the whole pipeline: normalize, match, rank, paginate.
    ///
    /// Fails with `InvalidQuery` when the query normalizes to nothing and
    /// with `InvalidPage` when `limit` is zero or `offset / limit + 1`
    /// overflows.
    pub fn search(&self, query: &str, offset: usize, limit: usize) -> Result<SearchResponse> {
        let terms = normalize::tokens(query);
        let positions = self.index.match_tokens(&terms)?;

        let page: Page<&Document> = if positions.is_empty() {
            empty_page(offset, limit)?
        } else {
            let ranked = self.rank_positions(&terms, &positions);
            paginate(&ranked, offset, limit)?
        };

        tracing::debug!(
            "query {:?}: {} tokens, {} candidates, page {} of {}",
            query,
            terms.len(),
            positions.len(),
            page.pagination.current_page,
            page.pagination.total_pages
        );

        Ok(SearchResponse {
            items: page.items.into_iter().cloned().collect(),
            pagination: page.pagination,
            links: page.links,
        })
    }
}
