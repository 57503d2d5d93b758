//! Word segmentation for case conversion.
//!
//! The segmenter splits an arbitrary string into ASCII words in a single
//! left-to-right pass with no backtracking. Each step of the scan:
//!
//! 1. Skips separators (anything that is not an ASCII letter or digit,
//!    including every byte of a non-ASCII character)
//! 2. Takes a run of upper-case letters
//! 3. Takes the run of lower-case letters and digits that follows it
//! 4. Skips separators again
//!
//! Steps 2 and 3 together form one [`Word`]. Because both runs are contiguous
//! in the input, a word is always a borrowed slice of it.
//!
//! ## The `ID` acronym
//!
//! Words spelling `id` get a [`WordKind`] so renderers can apply the
//! `id` / `ID` conventions:
//!
//! - `id`, `Id`, `ID` on their own are [`WordKind::BareId`]
//! - `ID` followed by more upper-case letters (`IDText` from `sampleIDText`)
//!   is [`WordKind::LeadingId`], and renders as `ID` plus a separate tail word
//! - anything else, including `idea` or `id2`, is [`WordKind::Ordinary`]
//!
//! ## Examples
//!
//! ```rust
//! use tagcase::words::{segment, WordKind};
//!
//! let words = segment("sampleIDText");
//! assert_eq!(words.len(), 2);
//! assert_eq!(words[0].as_str(), "sample");
//! assert_eq!(words[1].as_str(), "IDText");
//! assert_eq!(words[1].kind(), WordKind::LeadingId);
//! assert_eq!(words[1].tail(), "Text");
//! ```

use std::fmt;

/// How a word relates to the `ID` acronym.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// Exactly two letters spelling `id` in any case: `id`, `Id`, `ID`
    BareId,
    /// Upper-case `ID` immediately followed by more upper-case letters
    LeadingId,
    /// Every other word
    Ordinary,
}

/// A single word extracted from the input.
///
/// Contains only ASCII letters and digits and is never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Word<'a> {
    text: &'a str,
    kind: WordKind,
}

impl<'a> Word<'a> {
    fn new(text: &'a str) -> Self {
        Word {
            text,
            kind: classify(text.as_bytes()),
        }
    }

    /// The word exactly as it appeared in the input.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The word's `ID` classification.
    #[must_use]
    pub fn kind(&self) -> WordKind {
        self.kind
    }

    /// The part of a [`WordKind::LeadingId`] word after the `ID` prefix.
    ///
    /// Returns the whole word for any other kind.
    #[must_use]
    pub fn tail(&self) -> &'a str {
        match self.kind {
            WordKind::LeadingId => &self.text[2..],
            _ => self.text,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; the segmenter never produces empty words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

fn classify(word: &[u8]) -> WordKind {
    let starts_with_id = word.len() >= 2 && word[..2].eq_ignore_ascii_case(b"id");
    if !starts_with_id {
        return WordKind::Ordinary;
    }
    match word.get(2) {
        None => WordKind::BareId,
        Some(&next) if !is_part(next) => WordKind::LeadingId,
        Some(_) => WordKind::Ordinary,
    }
}

/// Lazy iterator over the words of a string.
///
/// Created by [`Words::new`] or [`segment`].
#[derive(Clone, Debug)]
pub struct Words<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Words<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Words { input, position: 0 }
    }

    fn skip_while(&mut self, pred: fn(u8) -> bool) {
        let bytes = self.input.as_bytes();
        while self.position < bytes.len() && pred(bytes[self.position]) {
            self.position += 1;
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        self.skip_while(|c| !is_word(c));
        if self.position >= input.len() {
            return None;
        }

        let start = self.position;
        self.skip_while(is_upper);
        self.skip_while(is_part);
        let end = self.position;
        self.skip_while(|c| !is_word(c));

        // Only ASCII bytes were consumed between start and end, so both are
        // char boundaries.
        Some(Word::new(&input[start..end]))
    }
}

impl std::iter::FusedIterator for Words<'_> {}

/// Splits `input` into words.
///
/// Empty input, or input without any ASCII letter or digit, yields no words.
///
/// # Examples
///
/// ```rust
/// use tagcase::words::segment;
///
/// let words: Vec<_> = segment("___$$Base64Encode")
///     .iter()
///     .map(|w| w.as_str())
///     .collect();
/// assert_eq!(words, vec!["Base64", "Encode"]);
///
/// assert!(segment("•¶§ƒ˚").is_empty());
/// ```
#[must_use]
pub fn segment(input: &str) -> Vec<Word<'_>> {
    Words::new(input).collect()
}

fn is_part(c: u8) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn is_word(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        segment(input).iter().map(Word::as_str).collect()
    }

    fn kinds(input: &str) -> Vec<WordKind> {
        segment(input).iter().map(Word::kind).collect()
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
        assert!(segment("$#%_-").is_empty());
        assert!(segment("•¶§ƒ˚˙∆˚¬").is_empty());
    }

    #[test]
    fn test_splits_on_case_change() {
        assert_eq!(texts("sampleText"), vec!["sample", "Text"]);
        assert_eq!(
            texts("inviteYourCustomersAddInvites"),
            vec!["invite", "Your", "Customers", "Add", "Invites"]
        );
    }

    #[test]
    fn test_acronym_run_absorbs_following_lower_run() {
        assert_eq!(texts("SAMPLE 2 TEXT"), vec!["SAMPLE", "2", "TEXT"]);
        assert_eq!(texts("HTTPServer"), vec!["HTTPServer"]);
    }

    #[test]
    fn test_digits_stay_in_lower_run() {
        assert_eq!(texts("Base64Encode"), vec!["Base64", "Encode"]);
        assert_eq!(texts("sample 2 Text"), vec!["sample", "2", "Text"]);
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        assert_eq!(texts("•¶§ƒ˚foo˙∆˚¬"), vec!["foo"]);
        assert_eq!(texts("caféBar"), vec!["caf", "Bar"]);
    }

    #[test]
    fn test_bare_id() {
        assert_eq!(kinds("id"), vec![WordKind::BareId]);
        assert_eq!(kinds("Id"), vec![WordKind::BareId]);
        assert_eq!(kinds("ID"), vec![WordKind::BareId]);
        assert_eq!(
            kinds("sample-id-text"),
            vec![WordKind::Ordinary, WordKind::BareId, WordKind::Ordinary]
        );
    }

    #[test]
    fn test_leading_id() {
        let words = segment("sampleIDText");
        assert_eq!(words[1].kind(), WordKind::LeadingId);
        assert_eq!(words[1].tail(), "Text");

        let words = segment("IDS");
        assert_eq!(words[0].kind(), WordKind::LeadingId);
        assert_eq!(words[0].tail(), "S");
    }

    #[test]
    fn test_id_prefix_of_longer_word_is_ordinary() {
        assert_eq!(kinds("idea"), vec![WordKind::Ordinary]);
        assert_eq!(kinds("id2"), vec![WordKind::Ordinary]);
        assert_eq!(kinds("Identifier"), vec![WordKind::Ordinary]);
    }

    #[test]
    fn test_mixed_case_i_d_splits() {
        assert_eq!(texts("iD"), vec!["i", "D"]);
    }

    #[test]
    fn test_words_iterator_is_fused() {
        let mut words = Words::new("a");
        assert!(words.next().is_some());
        assert!(words.next().is_none());
        assert!(words.next().is_none());
    }
}
