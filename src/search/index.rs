use std::collections::{HashMap, HashSet};

use crate::error::{Result, SearchError};
use crate::models::Document;

use super::normalize;

/// Inverted index from normalized token to the corpus positions containing it.
///
/// Posting lists are sorted ascending and hold each position once. The
/// normalized token sequence of every document is kept alongside so ranking
/// never re-normalizes the corpus.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<usize>>,
    doc_tokens: Vec<Vec<String>>,
}

impl InvertedIndex {
    /// Build the index over `corpus`. A document's position is its index in
    /// the slice.
    pub fn build(corpus: &[Document]) -> Result<Self> {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();
        let mut doc_tokens = Vec::with_capacity(corpus.len());
        let mut seen_ids = HashSet::with_capacity(corpus.len());

        for (position, doc) in corpus.iter().enumerate() {
            if !seen_ids.insert(doc.id.as_str()) {
                return Err(SearchError::IndexBuild {
                    position,
                    reason: format!("duplicate document id {:?}", doc.id),
                });
            }

            let tokens = normalize::tokens(&doc.message);
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in distinct {
                postings.entry(token.to_string()).or_default().push(position);
            }
            doc_tokens.push(tokens);
        }

        Ok(Self {
            postings,
            doc_tokens,
        })
    }

    /// Positions containing `token`. A token absent from the index has no
    /// postings; that is not an error.
    pub fn lookup(&self, token: &str) -> &[usize] {
        self.postings.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Normalized tokens of the document at `position`.
    pub fn tokens_at(&self, position: usize) -> &[String] {
        &self.doc_tokens[position]
    }

    /// Number of distinct tokens.
    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.doc_tokens.len()
    }

    /// Positions whose documents contain every token of `query` (logical AND).
    ///
    /// The result is sorted ascending, though callers should treat it as a set.
    /// Fails with [`SearchError::InvalidQuery`] when the query normalizes to
    /// no tokens.
    pub fn match_query(&self, query: &str) -> Result<Vec<usize>> {
        let tokens = normalize::tokens(query);
        self.match_tokens(&tokens)
    }

    /// Same as [`match_query`](Self::match_query) on already-normalized tokens.
    pub fn match_tokens(&self, tokens: &[String]) -> Result<Vec<usize>> {
        let (first, rest) = tokens.split_first().ok_or(SearchError::InvalidQuery)?;

        let mut candidates = self.lookup(first).to_vec();
        for token in rest {
            if candidates.is_empty() {
                break;
            }
            candidates = intersect(&candidates, self.lookup(token));
        }
        Ok(candidates)
    }
}

/// Intersection of two ascending, duplicate-free position lists.
fn intersect(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("a", "red fox jumps"),
            Document::new("b", "red dog runs"),
            Document::new("c", "the dog jumps over the fox"),
            Document::new("d", "Green tree, green sea"),
        ]
    }

    #[test]
    fn test_build_posting_lists() {
        let index = InvertedIndex::build(&corpus()).unwrap();
        assert_eq!(index.lookup("red"), &[0, 1]);
        assert_eq!(index.lookup("jump"), &[0, 2]);
        assert_eq!(index.lookup("dog"), &[1, 2]);
        assert_eq!(index.doc_count(), 4);
    }

    #[test]
    fn test_repeated_token_indexed_once() {
        let index = InvertedIndex::build(&corpus()).unwrap();
        assert_eq!(index.lookup("green"), &[3]);
        assert_eq!(index.lookup("the"), &[2]);
        assert_eq!(index.tokens_at(3), &["green", "tree", "green", "sea"]);
    }

    #[test]
    fn test_lookup_miss_is_empty() {
        let index = InvertedIndex::build(&corpus()).unwrap();
        assert!(index.lookup("zzz").is_empty());
        assert!(index.match_query("zzz").unwrap().is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let index = InvertedIndex::build(&[]).unwrap();
        assert_eq!(index.vocabulary_size(), 0);
        assert!(index.match_query("anything").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_id_fails_build() {
        let docs = vec![Document::new("a", "one"), Document::new("a", "two")];
        let err = InvertedIndex::build(&docs).unwrap_err();
        assert!(matches!(err, SearchError::IndexBuild { position: 1, .. }));
    }

    #[test]
    fn test_empty_query_is_invalid() {
        let index = InvertedIndex::build(&corpus()).unwrap();
        assert!(matches!(index.match_query(""), Err(SearchError::InvalidQuery)));
        assert!(matches!(
            index.match_query("  ?!  "),
            Err(SearchError::InvalidQuery)
        ));
    }

    #[test]
    fn test_single_token_match() {
        let index = InvertedIndex::build(&corpus()).unwrap();
        assert_eq!(index.match_query("Dogs").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_two_token_and() {
        let index = InvertedIndex::build(&corpus()).unwrap();
        assert_eq!(index.match_query("red fox").unwrap(), vec![0]);
    }

    #[test]
    fn test_all_tokens_constrain_result() {
        let index = InvertedIndex::build(&corpus()).unwrap();
        // "dog" and "jump" together match only "c"; "red" must still apply.
        assert_eq!(index.match_query("dog jumps").unwrap(), vec![2]);
        assert!(index.match_query("red dog jumps").unwrap().is_empty());
        assert_eq!(index.match_query("fox jumping dog").unwrap(), vec![2]);
    }

    #[test]
    fn test_unknown_token_collapses_intersection() {
        let index = InvertedIndex::build(&corpus()).unwrap();
        assert!(index.match_query("zzz red").unwrap().is_empty());
        assert!(index.match_query("red zzz").unwrap().is_empty());
    }

    #[test]
    fn test_intersect() {
        assert_eq!(intersect(&[1, 3, 5, 7], &[2, 3, 7, 9]), vec![3, 7]);
        assert!(intersect(&[1, 2], &[]).is_empty());
    }
}
