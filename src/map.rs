//! Ordered key/value view of a tag string.
//!
//! [`TagMap`] wraps an [`IndexMap`] so that pairs keep the order in which
//! they appeared in the tag. It is the structured counterpart of
//! [`TagString`]: parse one with [`TagString::to_map`], and turn it back into
//! a tag string with `TagString::from`.
//!
//! Tag strings may repeat a key. Every lookup on a [`TagString`] acts on the
//! first occurrence, so [`TagMap`] keeps the first value and ignores later
//! duplicates.
//!
//! ## Examples
//!
//! ```rust
//! use tagcase::{TagMap, TagString};
//!
//! let mut map = TagMap::new();
//! map.insert("json", "name,omitempty");
//! map.insert("col", "name");
//!
//! let tag = TagString::from(map);
//! assert_eq!(tag, r#"json:"name,omitempty" col:"name""#);
//! ```
//!
//! [`TagString`]: crate::TagString
//! [`TagString::to_map`]: crate::TagString::to_map

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of tag keys to tag values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap(IndexMap<String, String>);

impl TagMap {
    /// Creates an empty `TagMap`.
    #[must_use]
    pub fn new() -> Self {
        TagMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TagMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a pair, replacing the value but keeping the position if the
    /// key is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::TagMap;
    ///
    /// let mut map = TagMap::new();
    /// assert!(map.insert("json", "a").is_none());
    /// assert_eq!(map.insert("json", "b").as_deref(), Some("a"));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Inserts a pair only if the key is not present yet.
    ///
    /// Returns `true` if the pair was inserted.
    pub fn insert_first(&mut self, key: &str, value: &str) -> bool {
        if self.0.contains_key(key) {
            return false;
        }
        self.0.insert(key.to_string(), value.to_string());
        true
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Removes a pair, preserving the order of the remaining pairs.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in tag order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the pairs, in tag order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for TagMap {
    fn from(map: HashMap<String, String>) -> Self {
        TagMap(map.into_iter().collect())
    }
}

impl From<TagMap> for HashMap<String, String> {
    fn from(map: TagMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for TagMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = TagMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_first_keeps_original() {
        let mut map = TagMap::new();
        assert!(map.insert_first("json", "a"));
        assert!(!map.insert_first("json", "b"));
        assert_eq!(map.get("json"), Some("a"));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: TagMap = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(map.remove("b").as_deref(), Some("2"));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
