//! Configuration options for tag sorting.
//!
//! [`TagOptions`] controls how [`TagString::sort_with_options`] orders pairs.
//! By default the `json` pair is moved to the front and everything else is
//! ordered by key, since `json` is the tag most readers look for first.
//!
//! ## Examples
//!
//! ```rust
//! use tagcase::{TagOptions, TagString};
//!
//! let mut tag = TagString::from(r#"xyz:"1" db:"2" abc:"3""#);
//! tag.sort_with_options(&TagOptions::new().with_leading_key("db"));
//! assert_eq!(tag, r#"db:"2" abc:"3" xyz:"1""#);
//!
//! let mut tag = TagString::from(r#"xyz:"1" json:"2" abc:"3""#);
//! tag.sort_with_options(&TagOptions::new().without_leading_key());
//! assert_eq!(tag, r#"abc:"3" json:"2" xyz:"1""#);
//! ```
//!
//! [`TagString::sort_with_options`]: crate::TagString::sort_with_options

use std::cmp::Ordering;

/// Key that [`TagOptions::default`] sorts before every other key.
pub const DEFAULT_LEADING_KEY: &str = "json";

/// Configuration options for sorting tag strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagOptions {
    pub leading_key: Option<String>,
}

impl Default for TagOptions {
    fn default() -> Self {
        TagOptions {
            leading_key: Some(DEFAULT_LEADING_KEY.to_string()),
        }
    }
}

impl TagOptions {
    /// Creates default options (`json` leads, remaining keys sorted).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::TagOptions;
    ///
    /// let options = TagOptions::new();
    /// assert_eq!(options.leading_key.as_deref(), Some("json"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key that is always sorted first.
    #[must_use]
    pub fn with_leading_key(mut self, key: impl Into<String>) -> Self {
        self.leading_key = Some(key.into());
        self
    }

    /// Sorts every key lexicographically, with no key favored.
    #[must_use]
    pub fn without_leading_key(mut self) -> Self {
        self.leading_key = None;
        self
    }

    /// Orders two keys: the leading key first, then byte-wise lexicographic.
    #[must_use]
    pub fn compare_keys(&self, a: &str, b: &str) -> Ordering {
        if let Some(leading) = self.leading_key.as_deref() {
            match (a == leading, b == leading) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_leads_with_json() {
        let options = TagOptions::default();
        assert_eq!(options.compare_keys("json", "abc"), Ordering::Less);
        assert_eq!(options.compare_keys("abc", "json"), Ordering::Greater);
        assert_eq!(options.compare_keys("json", "json"), Ordering::Equal);
        assert_eq!(options.compare_keys("abc", "xyz"), Ordering::Less);
    }

    #[test]
    fn test_without_leading_key() {
        let options = TagOptions::new().without_leading_key();
        assert_eq!(options.compare_keys("json", "abc"), Ordering::Greater);
    }
}
