//! Order-preserving de-duplication.
//!
//! Handy when collecting tag keys or words from several sources, e.g. to
//! build the key list for [`TagString::remove_multi`].
//!
//! [`TagString::remove_multi`]: crate::TagString::remove_multi

use indexmap::IndexSet;
use std::hash::Hash;

/// Returns the distinct elements of `items`, in order of first appearance.
///
/// # Examples
///
/// ```rust
/// use tagcase::distinct;
///
/// assert_eq!(distinct(["json", "col", "json", "db"]), vec!["json", "col", "db"]);
/// assert!(distinct(Vec::<u8>::new()).is_empty());
/// ```
pub fn distinct<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    items.into_iter().collect::<IndexSet<T>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_keeps_first_appearance() {
        assert_eq!(distinct([3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_distinct_owned_strings() {
        let keys = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(distinct(keys), vec!["a".to_string(), "b".to_string()]);
    }
}
