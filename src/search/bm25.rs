use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::models::Document;

/// BM25 tuning constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Document-length normalization strength.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// A document under consideration together with its normalized tokens.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub document: &'a Document,
    pub tokens: &'a [String],
}

/// A ranked document and its BM25 score.
#[derive(Debug, Clone, Copy)]
pub struct Bm25Hit<'a> {
    pub document: &'a Document,
    pub score: f64,
}

/// Score and order `candidates` against `query_terms`.
///
/// All statistics (N, document frequency, average length) are taken from the
/// candidate set itself, not the whole corpus. Repeated query terms count
/// once. Hits are sorted by descending score; equal scores order by
/// descending document id.
pub fn rank<'a>(
    params: &Bm25Params,
    query_terms: &[String],
    candidates: &[Candidate<'a>],
) -> Vec<Bm25Hit<'a>> {
    let mut hits: Vec<Bm25Hit<'a>> = score(params, query_terms, candidates)
        .into_iter()
        .zip(candidates)
        .map(|(score, c)| Bm25Hit {
            document: c.document,
            score,
        })
        .collect();

    hits.sort_by(compare_hits);
    hits
}

fn compare_hits(a: &Bm25Hit<'_>, b: &Bm25Hit<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.document.id.cmp(&a.document.id))
}

/// BM25 score of each candidate, in input order.
pub fn score(
    params: &Bm25Params,
    query_terms: &[String],
    candidates: &[Candidate<'_>],
) -> Vec<f64> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let terms: Vec<&str> = query_terms
        .iter()
        .map(String::as_str)
        .filter(|t| seen.insert(*t))
        .collect();

    let term_freqs: Vec<HashMap<&str, usize>> = candidates
        .iter()
        .map(|c| {
            let mut tf = HashMap::new();
            for token in c.tokens {
                *tf.entry(token.as_str()).or_insert(0) += 1;
            }
            tf
        })
        .collect();

    let n = candidates.len() as f64;
    let total_len: usize = candidates.iter().map(|c| c.tokens.len()).sum();
    let avgdl = total_len as f64 / n;

    let idfs: Vec<f64> = terms
        .iter()
        .map(|t| {
            let df = term_freqs.iter().filter(|tf| tf.contains_key(t)).count();
            idf(n, df as f64)
        })
        .collect();

    candidates
        .iter()
        .zip(&term_freqs)
        .map(|(c, tf)| {
            let len_norm = if avgdl > 0.0 {
                1.0 - params.b + params.b * c.tokens.len() as f64 / avgdl
            } else {
                1.0 - params.b
            };
            terms
                .iter()
                .zip(&idfs)
                .map(|(t, idf)| {
                    let f = tf.get(t).copied().unwrap_or(0) as f64;
                    idf * f * (params.k1 + 1.0) / (f + params.k1 * len_norm)
                })
                .sum()
        })
        .collect()
}

/// `ln((N - n + 0.5) / (n + 0.5) + 1)`; always positive.
fn idf(n: f64, df: f64) -> f64 {
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::normalize::tokens;

    fn docs(entries: &[(&str, &str)]) -> (Vec<Document>, Vec<Vec<String>>) {
        let docs: Vec<Document> = entries
            .iter()
            .map(|(id, m)| Document::new(*id, *m))
            .collect();
        let toks = docs.iter().map(|d| tokens(&d.message)).collect();
        (docs, toks)
    }

    fn candidates<'a>(docs: &'a [Document], toks: &'a [Vec<String>]) -> Vec<Candidate<'a>> {
        docs.iter()
            .zip(toks)
            .map(|(document, t)| Candidate {
                document,
                tokens: t,
            })
            .collect()
    }

    fn ids(hits: &[Bm25Hit<'_>]) -> Vec<String> {
        hits.iter().map(|h| h.document.id.clone()).collect()
    }

    #[test]
    fn test_single_document_score() {
        let (d, t) = docs(&[("a", "red fox")]);
        let scores = score(&Bm25Params::default(), &tokens("red"), &candidates(&d, &t));
        // N = 1, n = 1, f = 1, |D| = avgdl: idf * 2.5 / 2.5
        let expected = (4.0f64 / 3.0).ln();
        assert!((scores[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_equal_scores_break_ties_by_descending_id() {
        let (d, t) = docs(&[
            ("a", "red fox jumps"),
            ("c", "red cat naps"),
            ("b", "red dog runs"),
        ]);
        let hits = rank(&Bm25Params::default(), &tokens("red"), &candidates(&d, &t));
        assert_eq!(ids(&hits), vec!["c", "b", "a"]);
        assert_eq!(hits[0].score, hits[2].score);
    }

    #[test]
    fn test_higher_term_frequency_ranks_first() {
        let (d, t) = docs(&[("a", "fox den tree"), ("b", "fox fox fox")]);
        let hits = rank(&Bm25Params::default(), &tokens("fox"), &candidates(&d, &t));
        assert_eq!(ids(&hits), vec!["b", "a"]);
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_shorter_document_ranks_first() {
        let (d, t) = docs(&[
            ("z", "fox in a very long winded sentence about woods"),
            ("a", "fox den"),
        ]);
        let hits = rank(&Bm25Params::default(), &tokens("fox"), &candidates(&d, &t));
        assert_eq!(ids(&hits), vec!["a", "z"]);
    }

    #[test]
    fn test_repeated_query_terms_count_once() {
        let (d, t) = docs(&[("a", "red fox"), ("b", "red red dog")]);
        let c = candidates(&d, &t);
        let once = score(&Bm25Params::default(), &tokens("red"), &c);
        let twice = score(&Bm25Params::default(), &tokens("red red"), &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_statistics_scoped_to_candidates() {
        let (d, t) = docs(&[("a", "red fox"), ("b", "red dog"), ("c", "blue fox")]);
        let all = candidates(&d, &t);
        let subset = &all[..1];
        let scoped = score(&Bm25Params::default(), &tokens("fox"), subset);
        let wide = score(&Bm25Params::default(), &tokens("fox"), &all);
        assert!((scoped[0] - wide[0]).abs() > 1e-6);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(rank(&Bm25Params::default(), &tokens("red"), &[]).is_empty());
    }
}
