//! Text normalization shared by index build and query time.
//!
//! Pipeline: lowercase → strip punctuation → fold diacritics → Porter stem
//! each whitespace-delimited token → rejoin with single spaces.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::stemmer;

/// Characters removed before tokenizing, in addition to ASCII punctuation.
const EXTRA_PUNCTUATION: &[char] = &[
    '\u{2014}', // em dash
    '\u{2013}', // en dash
    '\u{2019}', // right single quotation mark
];

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

/// Letters with no canonical decomposition, mapped to their usual ASCII
/// spelling.
fn fold_letter(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ł' => "l",
        'þ' => "th",
        'ı' => "i",
        _ => return None,
    })
}

/// Fold accented letters to plain ASCII where a close equivalent exists
/// ("résumé" → "resume"). Characters without one are kept as-is.
pub fn fold_diacritics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_letter(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

/// Normalize raw text into a space-separated string of stemmed tokens.
///
/// Empty or punctuation-only input yields an empty string.
///
/// # Example
///
/// ```
/// use corpus_search::search::normalize::normalize;
///
/// assert_eq!(normalize("Red Foxes, jumping!"), "red fox jump");
/// ```
pub fn normalize(text: &str) -> String {
    tokens(text).join(" ")
}

/// Normalize and split into tokens. Equivalent to splitting the output of
/// [`normalize`] on whitespace.
pub fn tokens(text: &str) -> Vec<String> {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !is_punctuation(*c))
        .collect();

    fold_diacritics(&stripped)
        .split_whitespace()
        .map(stemmer::stem)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_stem() {
        assert_eq!(normalize("Red FOX Jumps"), "red fox jump");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(normalize("?!... -- ()"), "");
        assert!(tokens("\u{2014}\u{2019}").is_empty());
    }

    #[test]
    fn test_punctuation_is_deleted_not_split() {
        assert_eq!(normalize("well-known"), "wellknown");
        assert_eq!(normalize("don\u{2019}t\u{2014}stop"), "dontstop");
        assert_eq!(normalize("it's"), "it");
    }

    #[test]
    fn test_diacritics_folded() {
        assert_eq!(fold_diacritics("résumé naïve"), "resume naive");
        assert_eq!(fold_diacritics("straße"), "strasse");
        assert_eq!(normalize("Café"), normalize("cafe"));
        assert_eq!(normalize("NAÏVE"), normalize("naive"));
    }

    #[test]
    fn test_unfoldable_characters_kept() {
        assert_eq!(fold_diacritics("東京"), "東京");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize("  red \t\n fox  "), "red fox");
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let once = normalize("The quick brown foxes were running");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_tokens_match_normalize() {
        let text = "Hopping over lazy dogs";
        assert_eq!(tokens(text).join(" "), normalize(text));
    }
}
