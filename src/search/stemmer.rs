//! Porter stemmer.
//!
//! Implements the suffix-stripping algorithm from Porter, M.F. "An algorithm
//! for suffix stripping." Program 14.3 (1980): 130-137, with the extensions
//! used by NLTK's default `PorterStemmer` mode:
//!
//! - irregular forms are looked up first (`dying -> die`, `skies -> sky`);
//! - four-letter `ies`/`ied` words keep the `e` (`dies -> die`);
//! - step 1c rewrites `y` to `i` only after a consonant (`played -> play`);
//! - step 2 knows `bli -> ble`, `fulli -> ful` and `logi -> log`, and runs
//!   again after `alli -> al`;
//! - a two-letter vowel-consonant stem also counts as `*o`.
//!
//! Operates on lowercase ASCII. Words of two letters or fewer, and words with
//! any non-ASCII byte, are returned unchanged.

/// Stem a single lowercase word.
pub fn stem(word: &str) -> String {
    if let Some(stem) = irregular(word) {
        return stem.to_string();
    }
    if word.len() <= 2 || !word.is_ascii() {
        return word.to_string();
    }

    let mut w = Word::new(word);
    w.step1a();
    w.step1b();
    w.step1c();
    w.step2();
    w.apply_rules(STEP3);
    w.step4();
    w.step5();
    w.into_string()
}

fn irregular(word: &str) -> Option<&'static str> {
    let stem = match word {
        "sky" | "skies" => "sky",
        "dying" => "die",
        "lying" => "lie",
        "tying" => "tie",
        "news" => "news",
        "inning" | "innings" => "inning",
        "outing" | "outings" => "outing",
        "canning" | "cannings" => "canning",
        "howe" => "howe",
        "proceed" => "proceed",
        "exceed" => "exceed",
        "succeed" => "succeed",
        _ => return None,
    };
    Some(stem)
}

/// Step 2 rules, `(suffix, replacement)`, condition m > 0. `logi` is handled
/// in [`Word::step2`].
const STEP2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
];

/// Step 3 rules, condition m > 0.
const STEP3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 suffixes, removed when m > 1. `ion` is handled separately.
const STEP4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ou", "ism",
    "ate", "iti", "ous", "ive", "ize",
];

struct Word {
    b: Vec<u8>,
}

impl Word {
    fn new(word: &str) -> Self {
        Self {
            b: word.as_bytes().to_vec(),
        }
    }

    fn into_string(self) -> String {
        // Only ASCII bytes are ever written, so this cannot fail.
        String::from_utf8(self.b).unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.b.len()
    }

    fn ends_with(&self, suffix: &str) -> bool {
        self.b.ends_with(suffix.as_bytes())
    }

    /// Consonant flags for the first `len` bytes, in one left-to-right pass.
    /// `y` is a consonant at the start of the word or after a vowel.
    fn consonants(&self, len: usize) -> Vec<bool> {
        let mut flags: Vec<bool> = Vec::with_capacity(len);
        for &c in &self.b[..len] {
            let consonant = match c {
                b'a' | b'e' | b'i' | b'o' | b'u' => false,
                b'y' => flags.last().map_or(true, |prev| !prev),
                _ => true,
            };
            flags.push(consonant);
        }
        flags
    }

    /// Number of VC sequences in the first `len` bytes: `[C](VC)^m[V]`.
    fn measure(&self, len: usize) -> usize {
        self.consonants(len)
            .windows(2)
            .filter(|pair| !pair[0] && pair[1])
            .count()
    }

    fn has_vowel(&self, len: usize) -> bool {
        self.consonants(len).contains(&false)
    }

    /// `*d`: the first `len` bytes end in a double consonant.
    fn double_consonant(&self, len: usize) -> bool {
        len >= 2 && self.b[len - 1] == self.b[len - 2] && self.consonants(len)[len - 1]
    }

    /// `*o`: the first `len` bytes end consonant-vowel-consonant, where the
    /// final consonant is not `w`, `x` or `y`; or are exactly vowel-consonant.
    fn cvc(&self, len: usize) -> bool {
        let c = self.consonants(len);
        match len {
            2 => !c[0] && c[1],
            0 | 1 => false,
            _ => {
                c[len - 3]
                    && !c[len - 2]
                    && c[len - 1]
                    && !matches!(self.b[len - 1], b'w' | b'x' | b'y')
            }
        }
    }

    fn replace_suffix(&mut self, suffix_len: usize, replacement: &str) {
        let stem = self.len() - suffix_len;
        self.b.truncate(stem);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    fn step1a(&mut self) {
        if self.len() == 4 && self.ends_with("ies") {
            self.replace_suffix(1, "");
        } else if self.ends_with("sses") || self.ends_with("ies") {
            self.replace_suffix(2, "");
        } else if !self.ends_with("ss") && self.ends_with("s") {
            self.replace_suffix(1, "");
        }
    }

    fn step1b(&mut self) {
        if self.ends_with("ied") {
            let keep = if self.len() == 4 { "ie" } else { "i" };
            self.replace_suffix(3, keep);
            return;
        }
        if self.ends_with("eed") {
            if self.measure(self.len() - 3) > 0 {
                self.replace_suffix(1, "");
            }
            return;
        }

        let suffix_len = if self.ends_with("ed") {
            2
        } else if self.ends_with("ing") {
            3
        } else {
            return;
        };
        if !self.has_vowel(self.len() - suffix_len) {
            return;
        }
        self.replace_suffix(suffix_len, "");

        if self.ends_with("at") || self.ends_with("bl") || self.ends_with("iz") {
            self.b.push(b'e');
        } else if self.double_consonant(self.len()) {
            if !matches!(self.b[self.len() - 1], b'l' | b's' | b'z') {
                self.b.pop();
            }
        } else if self.measure(self.len()) == 1 && self.cvc(self.len()) {
            self.b.push(b'e');
        }
    }

    fn step1c(&mut self) {
        let last = self.len() - 1;
        if self.ends_with("y") && last > 1 && self.consonants(last)[last - 1] {
            self.b[last] = b'i';
        }
    }

    fn step2(&mut self) {
        if self.ends_with("alli") && self.measure(self.len() - 4) > 0 {
            self.replace_suffix(2, "");
        }
        if self.ends_with("logi") {
            // The `l` stays with the stem, so `geologi` and `theologi` qualify.
            if self.measure(self.len() - 3) > 0 {
                self.b.pop();
            }
            return;
        }
        self.apply_rules(STEP2);
    }

    /// The first matching suffix decides the step, even when its measure
    /// condition then fails.
    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        if let Some((suffix, replacement)) = rules.iter().find(|(s, _)| self.ends_with(s)) {
            if self.measure(self.len() - suffix.len()) > 0 {
                self.replace_suffix(suffix.len(), replacement);
            }
        }
    }

    fn step4(&mut self) {
        let matched = STEP4
            .iter()
            .filter(|s| self.ends_with(s))
            .max_by_key(|s| s.len())
            .map(|s| s.len());

        let suffix_len = match matched {
            Some(len) => len,
            None if self.ends_with("ion") => {
                let stem = self.len() - 3;
                if stem == 0 || !matches!(self.b[stem - 1], b's' | b't') {
                    return;
                }
                3
            }
            None => return,
        };
        if self.measure(self.len() - suffix_len) > 1 {
            self.replace_suffix(suffix_len, "");
        }
    }

    fn step5(&mut self) {
        if self.ends_with("e") {
            let stem = self.len() - 1;
            let m = self.measure(stem);
            if m > 1 || (m == 1 && !self.cvc(stem)) {
                self.b.pop();
            }
        }
        if self.ends_with("l") && self.double_consonant(self.len()) && self.measure(self.len()) > 1
        {
            self.b.pop();
        }
    }
}
