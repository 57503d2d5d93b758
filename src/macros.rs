/// Builds a [`TagString`](crate::TagString) from `key: value` pairs.
///
/// Keys are identifiers or string literals (for keys such as `"db-col"`).
/// Values are any expression implementing `AsRef<str>`. Pairs go through
/// [`TagString::add`](crate::TagString::add), so a repeated key keeps its
/// first position and its last value.
///
/// # Examples
///
/// ```rust
/// use tagcase::tags;
///
/// let name = "comment";
/// let tag = tags! {
///     json: "comment,omitempty",
///     col: name,
///     "db-index": "true",
/// };
/// assert_eq!(tag, r#"json:"comment,omitempty" col:"comment" db-index:"true""#);
/// ```
#[macro_export]
macro_rules! tags {
    // Keys
    (@key $key:ident) => {
        stringify!($key)
    };
    (@key $key:literal) => {
        $key
    };

    // Handle empty tag
    () => {
        $crate::TagString::new()
    };

    // Handle non-empty tag
    ($($key:tt : $value:expr),+ $(,)?) => {{
        let mut tag = $crate::TagString::new();
        $(
            tag.add($crate::tags!(@key $key), ::core::convert::AsRef::<str>::as_ref(&$value));
        )+
        tag
    }};
}

#[cfg(test)]
mod tests {
    use crate::TagString;

    #[test]
    fn test_tags_macro_empty() {
        assert_eq!(tags!(), TagString::new());
    }

    #[test]
    fn test_tags_macro_pairs() {
        let tag = tags! { json: "id", col: "id" };
        assert_eq!(tag, r#"json:"id" col:"id""#);
    }

    #[test]
    fn test_tags_macro_owned_values() {
        let value = String::from("name");
        let tag = tags! { json: value, "db-col": format!("{}_col", "name") };
        assert_eq!(tag, r#"json:"name" db-col:"name_col""#);
    }

    #[test]
    fn test_tags_macro_repeated_key() {
        let tag = tags! { json: "a", col: "b", json: "c" };
        assert_eq!(tag, r#"json:"c" col:"b""#);
    }
}
