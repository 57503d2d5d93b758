//! Error types for case conversion and tag editing.
//!
//! Almost everything in this crate is total: case conversion never fails and
//! tag lookups return empty results instead of errors. The few places that do
//! report failure use [`Error`]:
//!
//! - **Unrecognized keys**: [`TagString::remove_multi`] reports every key that
//!   is not a syntactically valid tag key
//! - **Unknown case names**: parsing a [`Case`] from a string
//! - **Invalid keys**: key validation used by the tag mutators
//!
//! ## Examples
//!
//! ```rust
//! use tagcase::{Error, TagString};
//!
//! let mut tag = TagString::from(r#"json:"id" col:"id""#);
//! let err = tag.remove_multi(["col", "bad key"]).unwrap_err();
//! assert!(matches!(err, Error::UnrecognizedKeys(ref keys) if keys == &["bad key"]));
//! assert_eq!(tag, r#"json:"id""#);
//! ```
//!
//! [`TagString::remove_multi`]: crate::TagString::remove_multi
//! [`Case`]: crate::Case

use std::fmt;
use thiserror::Error;

/// Represents all errors reported by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One or more keys passed to a multi-key operation were not valid tag keys
    #[error("The following key(s) were not recognised: {}", .0.join(", "))]
    UnrecognizedKeys(Vec<String>),

    /// A key that cannot appear in a tag string
    #[error("Invalid tag key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// A case name that does not map to any [`Case`](crate::Case)
    #[error("Unknown case {0:?}, expected one of snake, kebab, camel, pascal, uncased, slug")]
    UnknownCase(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unrecognized-keys error from any list of keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::Error;
    ///
    /// let err = Error::unrecognized_keys(["a b", ""]);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "The following key(s) were not recognised: a b, "
    /// );
    /// ```
    pub fn unrecognized_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::UnrecognizedKeys(keys.into_iter().map(Into::into).collect())
    }

    /// Creates an invalid key error.
    pub fn invalid_key(key: &str, reason: &str) -> Self {
        Error::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an unknown case error.
    pub fn unknown_case(name: &str) -> Self {
        Error::UnknownCase(name.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
