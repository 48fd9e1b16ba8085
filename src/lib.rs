//! # corpus-search
//!
//! Keyword search over a fixed, in-memory text corpus, served over HTTP with
//! BM25 ranking and paginated, linkable results.
//!
//! ## Architecture
//!
//! ```text
//!   corpus.json ──► load_corpus ──► InvertedIndex::build      (once, at startup)
//!                                        │
//!                                        ▼
//!                          SearchEngine (immutable, Arc-shared)
//!
//!   GET /search?query=..&offset=..&limit=..                   (per request)
//!        │
//!        ▼
//!   ┌────────────┐   ┌──────────────┐   ┌──────────────┐   ┌────────────┐
//!   │ normalize  │──►│ match (AND)  │──►│ BM25 rank    │──►│ paginate   │
//!   │ lower/strip│   │ n-way posting│   │ stats over   │   │ items +    │
//!   │ fold/stem  │   │ intersection │   │ candidates   │   │ links      │
//!   └────────────┘   └──────────────┘   └──────────────┘   └────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration (bind address, corpus path, BM25 constants)
//! - [`models`] - Wire types: `Document`, `SearchRequest`, `SearchResponse`
//! - [`corpus`] - Corpus file loading and per-record validation
//! - [`search`] - Normalizer, inverted index, matcher, ranker, paginator
//! - [`api`] - Axum HTTP handlers
//! - [`state`] - Shared application state holding the search engine
//! - [`error`] - Search error taxonomy

pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod models;
pub mod search;
pub mod state;
