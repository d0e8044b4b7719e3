// api.rs - Idiomatic Rust API over the core engine.
//
// Wraps the raw-status-code pipeline with `&str -> Result<String, _>`
// normal-form functions and a grapheme-cluster iterator.

use smallvec::SmallVec;

use crate::decompose::decompose;
use crate::error::UnicodeError;
use crate::grapheme::grapheme_break_stateful;
use crate::normalize::{normalize_utf32, options_valid};
use crate::types::*;

/// Codepoint scratch buffer; short inputs normalize without touching the
/// heap.
type CodepointBuf = SmallVec<[Codepoint; 64]>;

fn normalize_str(s: &str, options: Options) -> Result<String, UnicodeError> {
    debug_assert!(options_valid(options));
    let count = decompose(s.as_bytes(), &mut [], options);
    if count < 0 {
        return Err(UnicodeError::from(count));
    }
    let mut buf = CodepointBuf::new();
    buf.resize(count as usize, 0);
    let result = decompose(s.as_bytes(), &mut buf, options);
    if result < 0 {
        return Err(UnicodeError::from(result));
    }
    let len = normalize_utf32(&mut buf, options) as usize;
    let mut out = String::with_capacity(s.len());
    for &cp in &buf[..len] {
        match char::from_u32(cp as u32) {
            Some(c) => out.push(c),
            None => return Err(UnicodeError::InvalidUtf8),
        }
    }
    Ok(out)
}

/// Normalization Form D (canonical decomposition).
///
/// # Examples
///
/// ```
/// assert_eq!(ferrune::api::nfd("Å").unwrap(), "A\u{030A}");
/// ```
pub fn nfd(s: &str) -> Result<String, UnicodeError> {
    normalize_str(s, NFD_OPTIONS)
}

/// Normalization Form C (canonical composition).
///
/// # Examples
///
/// ```
/// assert_eq!(ferrune::api::nfc("A\u{030A}").unwrap(), "Å");
/// ```
pub fn nfc(s: &str) -> Result<String, UnicodeError> {
    normalize_str(s, NFC_OPTIONS)
}

/// Normalization Form KD (compatibility decomposition).
pub fn nfkd(s: &str) -> Result<String, UnicodeError> {
    normalize_str(s, NFKD_OPTIONS)
}

/// Normalization Form KC (compatibility composition).
///
/// # Examples
///
/// ```
/// assert_eq!(ferrune::api::nfkc("ﬁ").unwrap(), "fi");
/// ```
pub fn nfkc(s: &str) -> Result<String, UnicodeError> {
    normalize_str(s, NFKC_OPTIONS)
}

/// NFKC with case folding and default-ignorable removal; the form used
/// for stable caseless matching.
pub fn nfkc_casefold(s: &str) -> Result<String, UnicodeError> {
    normalize_str(s, NFKC_CASEFOLD_OPTIONS)
}

/// Iterate over the extended grapheme clusters of a string.
///
/// # Examples
///
/// ```
/// use ferrune::api::graphemes;
///
/// let clusters: Vec<&str> = graphemes("a\u{0301}bc").collect();
/// assert_eq!(clusters, ["a\u{0301}", "b", "c"]);
/// ```
pub fn graphemes(s: &str) -> Graphemes<'_> {
    Graphemes {
        rest: s,
        state: BOUNDCLASS_START,
    }
}

/// Iterator over extended grapheme clusters, driven by the stateful
/// boundary automaton.
#[derive(Debug, Clone)]
pub struct Graphemes<'a> {
    rest: &'a str,
    state: i32,
}

impl<'a> Graphemes<'a> {
    /// The not-yet-iterated tail of the subject string.
    pub fn as_str(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let mut chars = self.rest.char_indices();
        let (_, first) = chars.next()?;
        let mut prev = first as Codepoint;
        let mut split = self.rest.len();
        for (offset, ch) in chars {
            if grapheme_break_stateful(prev, ch as Codepoint, &mut self.state) {
                split = offset;
                break;
            }
            prev = ch as Codepoint;
        }
        let (cluster, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(cluster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_forms() {
        assert_eq!(nfc("A\u{030A}").unwrap(), "Å");
        assert_eq!(nfd("Å").unwrap(), "A\u{030A}");
        assert_eq!(nfkd("ﬁx").unwrap(), "fix");
        assert_eq!(nfkc("①").unwrap(), "1");
        assert_eq!(nfkc_casefold("ẞ").unwrap(), "ss");
    }

    #[test]
    fn empty_input() {
        assert_eq!(nfc("").unwrap(), "");
        assert!(graphemes("").next().is_none());
    }

    #[test]
    fn grapheme_clusters() {
        let got: Vec<&str> = graphemes("a\u{0301}b").collect();
        assert_eq!(got, ["a\u{0301}", "b"]);

        let got: Vec<&str> = graphemes("\u{1F1FA}\u{1F1F8}\u{1F1FA}").collect();
        assert_eq!(got, ["\u{1F1FA}\u{1F1F8}", "\u{1F1FA}"]);

        let got: Vec<&str> = graphemes("\u{1100}\u{1161}\u{11A8}x").collect();
        assert_eq!(got, ["\u{1100}\u{1161}\u{11A8}", "x"]);

        let got: Vec<&str> = graphemes("\r\na").collect();
        assert_eq!(got, ["\r\n", "a"]);
    }

    #[test]
    fn grapheme_zwj_emoji() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        let got: Vec<&str> = graphemes(family).collect();
        assert_eq!(got, [family]);
    }

    #[test]
    fn graphemes_as_str() {
        let mut it = graphemes("ab");
        assert_eq!(it.as_str(), "ab");
        it.next();
        assert_eq!(it.as_str(), "b");
    }

    #[test]
    fn single_char_cluster_reuse() {
        // long string of independent clusters
        let s = "hello";
        let got: Vec<&str> = graphemes(s).collect();
        assert_eq!(got.concat(), s);
        assert_eq!(got.len(), 5);
    }
}
