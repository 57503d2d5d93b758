//! Struct-tag style annotation strings.
//!
//! A [`TagString`] holds a flat list of `key:"value"` pairs separated by
//! whitespace, the shape used for per-field metadata:
//!
//! ```text
//! json:"name,omitempty" col:"name" protobuf:"bytes,4,opt,name=name,proto3"
//! ```
//!
//! No parsed form is kept between calls. Every operation re-scans the string
//! with [`Pairs`] and rewrites only the bytes it has to, so spacing and pair
//! order survive everything except [`TagString::sort`].
//!
//! ## Grammar
//!
//! - a **key** is a non-empty run of bytes that are not whitespace, control
//!   characters, `:` or `"`
//! - it is followed directly by `:"`, the value, and a closing `"`
//! - values are taken verbatim; there is no escape processing, so a value
//!   cannot contain `"`
//! - a fragment that does not fit is skipped up to the next whitespace
//!
//! When a key appears more than once, lookups and mutations act on the
//! first occurrence.
//!
//! ## Examples
//!
//! ```rust
//! use tagcase::TagString;
//!
//! let mut tag = TagString::from(r#"xyz:"1" json:"id""#);
//! assert_eq!(tag.get("json"), "id");
//!
//! assert!(tag.set("xyz", "2"));
//! tag.add("col", "id");
//! tag.sort();
//! assert_eq!(tag, r#"json:"id" col:"id" xyz:"2""#);
//! ```

use crate::{Error, Result, TagMap, TagOptions};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// One `key:"value"` pair found by [`Pairs`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair<'a> {
    pub key: &'a str,
    pub value: &'a str,
    /// Byte range of the whole pair, from the key to the closing quote.
    pub span: Range<usize>,
    /// Byte range of the value between the quotes.
    pub value_span: Range<usize>,
}

/// Single-pass scanner over the pairs of a tag string.
#[derive(Clone, Debug)]
pub struct Pairs<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Pairs<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Pairs { input, position: 0 }
    }

    fn skip_while(&mut self, pred: fn(u8) -> bool) {
        let bytes = self.input.as_bytes();
        while self.position < bytes.len() && pred(bytes[self.position]) {
            self.position += 1;
        }
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Pair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let bytes = input.as_bytes();
        loop {
            self.skip_while(|c| c.is_ascii_whitespace());
            if self.position >= bytes.len() {
                return None;
            }

            let start = self.position;
            let mut key_end = start;
            while key_end < bytes.len() && is_key_byte(bytes[key_end]) {
                key_end += 1;
            }

            let opens_value = key_end > start
                && bytes.get(key_end) == Some(&b':')
                && bytes.get(key_end + 1) == Some(&b'"');
            if opens_value {
                let value_start = key_end + 2;
                let Some(len) = bytes[value_start..].iter().position(|&c| c == b'"') else {
                    // Unterminated value swallows the rest of the input.
                    self.position = bytes.len();
                    return None;
                };
                let value_end = value_start + len;
                self.position = value_end + 1;
                return Some(Pair {
                    key: &input[start..key_end],
                    value: &input[value_start..value_end],
                    span: start..self.position,
                    value_span: value_start..value_end,
                });
            }

            self.skip_while(|c| !c.is_ascii_whitespace());
        }
    }
}

impl std::iter::FusedIterator for Pairs<'_> {}

fn is_key_byte(c: u8) -> bool {
    c > b' ' && c != b':' && c != b'"' && c != 0x7f
}

/// Checks that `key` can appear as a tag key.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] for an empty key or one containing
/// whitespace, a control character, `:` or `"`.
///
/// # Examples
///
/// ```rust
/// use tagcase::tag::validate_key;
///
/// assert!(validate_key("json").is_ok());
/// assert!(validate_key("my key").is_err());
/// assert!(validate_key("").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_key(key, "key is empty"));
    }
    if !key.bytes().all(is_key_byte) {
        return Err(Error::invalid_key(
            key,
            "key contains whitespace, a control character, ':' or '\"'",
        ));
    }
    Ok(())
}

fn validate_value(value: &str) -> Result<()> {
    if value.contains('"') {
        return Err(Error::custom(format!(
            "value {value:?} contains a double quote"
        )));
    }
    Ok(())
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str(":\"");
    out.push_str(value);
    out.push('"');
}

/// A whitespace-separated list of `key:"value"` pairs.
///
/// Mutating methods take `&mut self`, so sharing one tag between threads
/// requires the usual external synchronization (a `Mutex`, or one owner).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagString(String);

impl TagString {
    /// Creates an empty tag string.
    #[must_use]
    pub fn new() -> Self {
        TagString(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns an iterator over every well-formed pair, in order.
    pub fn pairs(&self) -> Pairs<'_> {
        Pairs::new(&self.0)
    }

    fn find(&self, key: &str) -> Option<Pair<'_>> {
        self.pairs().find(|pair| pair.key == key)
    }

    /// Returns the value of the first `key` pair, or `None` if there is none.
    ///
    /// Unlike [`TagString::get`] this tells a missing key apart from an
    /// empty value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::TagString;
    ///
    /// let tag = TagString::from(r#"json:"" col:"id""#);
    /// assert_eq!(tag.lookup("json"), Some(""));
    /// assert_eq!(tag.lookup("db"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.find(key).map(|pair| pair.value)
    }

    /// Returns the value of the first `key` pair, or `""` if there is none.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.lookup(key).unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Replaces the value of an existing `key` pair.
    ///
    /// Never adds a pair. Returns `false`, leaving the tag untouched, when
    /// the key is missing or the value contains `"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::TagString;
    ///
    /// let mut tag = TagString::from(r#"var1:"val1" var2:"val2""#);
    /// assert!(!tag.set("var", "val"));
    /// assert!(tag.set("var2", "val22"));
    /// assert_eq!(tag, r#"var1:"val1" var2:"val22""#);
    /// ```
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        if let Err(err) = validate_value(value) {
            log::warn!("refusing to set {key:?}: {err}");
            return false;
        }
        let Some(range) = self.find(key).map(|pair| pair.value_span) else {
            log::debug!("set of missing tag key {key:?} ignored");
            return false;
        };
        self.0.replace_range(range, value);
        true
    }

    /// Calls [`TagString::set`] for every pair.
    ///
    /// Returns `true` only if every individual set succeeded. All pairs are
    /// attempted regardless of earlier failures.
    pub fn set_multi<I, K, V>(&mut self, pairs: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs.into_iter().fold(true, |success, (key, value)| {
            self.set(key.as_ref(), value.as_ref()) && success
        })
    }

    /// Sets `key` if it exists, otherwise appends ` key:"value"`.
    ///
    /// Keys rejected by [`validate_key`] and values containing `"` are
    /// ignored with a warning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::TagString;
    ///
    /// let mut tag = TagString::from(r#"var1:"val1""#);
    /// tag.add("var1", "val11");
    /// tag.add("var2", "val2");
    /// assert_eq!(tag, r#"var1:"val11" var2:"val2""#);
    /// ```
    pub fn add(&mut self, key: &str, value: &str) {
        if let Err(err) = validate_key(key).and_then(|()| validate_value(value)) {
            log::warn!("refusing to add tag pair: {err}");
            return;
        }
        if let Some(range) = self.find(key).map(|pair| pair.value_span) {
            self.0.replace_range(range, value);
            return;
        }

        let mut tag = String::with_capacity(self.0.len() + key.len() + value.len() + 4);
        tag.push_str(&self.0);
        tag.push(' ');
        push_pair(&mut tag, key, value);
        self.0 = tag.trim().to_string();
    }

    /// Calls [`TagString::add`] for every pair.
    pub fn add_multi<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.add(key.as_ref(), value.as_ref());
        }
    }

    /// Removes the first `key` pair together with one adjacent separator.
    ///
    /// A missing key is not an error. A key that [`validate_key`] rejects is
    /// ignored as well, so this currently always returns `Ok(())`; use
    /// [`TagString::remove_multi`] to have such keys reported.
    ///
    /// # Errors
    ///
    /// None at present; the signature matches [`TagString::remove_multi`].
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if let Err(err) = validate_key(key) {
            log::debug!("remove ignored: {err}");
            return Ok(());
        }
        self.remove_first(key);
        Ok(())
    }

    /// Removes the first pair for each key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedKeys`] listing every key rejected by
    /// [`validate_key`]. The remaining keys are still removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::TagString;
    ///
    /// let mut tag = TagString::from(r#"var1:"val1" var2:"val2" var3:"val3""#);
    /// tag.remove_multi(["var2", "var3", "var4"]).unwrap();
    /// assert_eq!(tag, r#"var1:"val1""#);
    /// ```
    pub fn remove_multi<I, S>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unrecognized = Vec::new();
        for key in keys {
            let key = key.as_ref();
            if validate_key(key).is_err() {
                unrecognized.push(key.to_string());
                continue;
            }
            self.remove_first(key);
        }

        if unrecognized.is_empty() {
            Ok(())
        } else {
            Err(Error::unrecognized_keys(unrecognized))
        }
    }

    fn remove_first(&mut self, key: &str) -> bool {
        let Some(span) = self.find(key).map(|pair| pair.span) else {
            return false;
        };
        let bytes = self.0.as_bytes();
        let range = if span.start > 0 && bytes[span.start - 1].is_ascii_whitespace() {
            span.start - 1..span.end
        } else if bytes.get(span.end).is_some_and(u8::is_ascii_whitespace) {
            span.start..span.end + 1
        } else {
            span
        };
        self.0.replace_range(range, "");
        true
    }

    /// Sorts the pairs with the default [`TagOptions`]: `json` first, then
    /// by key.
    ///
    /// The result is single-space separated. Fragments that are not
    /// well-formed pairs are dropped. A tag without any pair is left as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::TagString;
    ///
    /// let mut tag = TagString::from(r#"xyz:"val1"   json:"x"  abc:"val2""#);
    /// tag.sort();
    /// assert_eq!(tag, r#"json:"x" abc:"val2" xyz:"val1""#);
    /// ```
    pub fn sort(&mut self) {
        self.sort_with_options(&TagOptions::default());
    }

    /// Sorts the pairs using the ordering configured in `options`.
    ///
    /// Pairs with equal keys keep their relative order.
    pub fn sort_with_options(&mut self, options: &TagOptions) {
        if let Some(sorted) = self.sorted(options) {
            self.0 = sorted;
        }
    }

    fn sorted(&self, options: &TagOptions) -> Option<String> {
        let mut pairs: Vec<Pair<'_>> = self.pairs().collect();
        if pairs.is_empty() {
            return None;
        }
        pairs.sort_by(|a, b| options.compare_keys(a.key, b.key));

        let mut out = String::with_capacity(self.0.len());
        for pair in &pairs {
            if !out.is_empty() {
                out.push(' ');
            }
            push_pair(&mut out, pair.key, pair.value);
        }
        Some(out)
    }

    /// Collects the pairs into an ordered [`TagMap`], keeping the first
    /// value of a repeated key.
    #[must_use]
    pub fn to_map(&self) -> TagMap {
        let mut map = TagMap::new();
        for pair in self.pairs() {
            map.insert_first(pair.key, pair.value);
        }
        map
    }
}

impl fmt::Display for TagString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TagString {
    fn from(tag: &str) -> Self {
        TagString(tag.to_string())
    }
}

impl From<String> for TagString {
    fn from(tag: String) -> Self {
        TagString(tag)
    }
}

impl From<TagString> for String {
    fn from(tag: TagString) -> Self {
        tag.0
    }
}

impl From<TagMap> for TagString {
    fn from(map: TagMap) -> Self {
        let mut tag = TagString::new();
        tag.add_multi(map);
        tag
    }
}

impl FromStr for TagString {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TagString::from(s))
    }
}

impl PartialEq<str> for TagString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TagString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for TagString {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}
