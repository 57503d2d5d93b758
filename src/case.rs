//! Rendering word lists into a target case.
//!
//! [`Case`] selects one of the supported output styles. All of them are
//! computed from the words produced by [`crate::words`]:
//!
//! | Case | `sample text ID` |
//! |------|------------------|
//! | [`Case::Snake`] | `sample_text_id` |
//! | [`Case::Kebab`] / [`Case::Slug`] | `sample-text-id` |
//! | [`Case::Camel`] | `sampleTextID` |
//! | [`Case::Pascal`] | `SampleTextID` |
//! | [`Case::Uncased`] | `Sample text ID` |
//!
//! Rendering is total: any input, including an empty string, produces a
//! (possibly empty) string.
//!
//! ## Examples
//!
//! ```rust
//! use tagcase::Case;
//!
//! assert_eq!(Case::Pascal.apply("id-sampleText"), "IDSampleText");
//! assert_eq!(Case::Snake.apply("sampleIDText"), "sample_id_text");
//! assert_eq!("kebab".parse::<Case>().unwrap(), Case::Kebab);
//! ```

use crate::words::{Word, WordKind, Words};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target case for [`render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `lower_case_with_underscores`
    #[default]
    Snake,
    /// `lower-case-with-dashes`
    Kebab,
    /// `firstLowerThenTitle`
    Camel,
    /// `EveryWordTitle`
    Pascal,
    /// `Human readable text`
    Uncased,
    /// Same output as [`Case::Kebab`]
    Slug,
}

impl Case {
    /// All cases, in declaration order.
    pub const ALL: [Case; 6] = [
        Case::Snake,
        Case::Kebab,
        Case::Camel,
        Case::Pascal,
        Case::Uncased,
        Case::Slug,
    ];

    /// Returns the lower-case name of this case.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Uncased => "uncased",
            Case::Slug => "slug",
        }
    }

    /// Segments `input` and renders it in this case.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        let words: Vec<Word<'_>> = Words::new(input).collect();
        render(&words, *self)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Case::ALL
            .into_iter()
            .find(|case| case.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_case(s))
    }
}

/// Renders `words` in the given case.
///
/// # Examples
///
/// ```rust
/// use tagcase::{case::render, words::segment, Case};
///
/// let words = segment("sample-id-text");
/// assert_eq!(render(&words, Case::Camel), "sampleIDText");
/// assert_eq!(render(&words, Case::Uncased), "Sample ID text");
/// ```
#[must_use]
pub fn render(words: &[Word<'_>], case: Case) -> String {
    match case {
        Case::Snake => join_lower(words, "_", "id"),
        Case::Kebab | Case::Slug => join_lower(words, "-", "id"),
        Case::Uncased => {
            let mut out = join_lower(words, " ", "ID");
            if let Some(first) = out.get_mut(..1) {
                first.make_ascii_uppercase();
            }
            out
        }
        Case::Camel => join_title(words, false),
        Case::Pascal => join_title(words, true),
    }
}

/// Lower-cased words joined by `sep`, with every `id` word spelled `id_word`.
fn join_lower(words: &[Word<'_>], sep: &str, id_word: &str) -> String {
    let mut out = String::with_capacity(words.iter().map(|w| w.len() + sep.len()).sum());
    for word in words {
        if !out.is_empty() {
            out.push_str(sep);
        }
        match word.kind() {
            WordKind::BareId => out.push_str(id_word),
            WordKind::LeadingId => {
                out.push_str(id_word);
                out.push_str(sep);
                push_lower(&mut out, word.tail());
            }
            WordKind::Ordinary => push_lower(&mut out, word.as_str()),
        }
    }
    out
}

fn join_title(words: &[Word<'_>], pascal: bool) -> String {
    let mut out = String::with_capacity(words.iter().map(Word::len).sum());
    for (i, word) in words.iter().enumerate() {
        if i == 0 && !pascal {
            push_lower(&mut out, word.as_str());
            continue;
        }
        match word.kind() {
            WordKind::BareId => out.push_str("ID"),
            WordKind::LeadingId => {
                out.push_str("ID");
                push_title(&mut out, word.tail());
            }
            WordKind::Ordinary => push_title(&mut out, word.as_str()),
        }
    }
    out
}

fn push_lower(out: &mut String, word: &str) {
    out.extend(word.chars().map(|c| c.to_ascii_lowercase()));
}

fn push_title(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}
