//! # tagcase
//!
//! Identifier case conversion and struct-tag style annotation editing.
//!
//! ## Case Conversion
//!
//! Any string is split into ASCII words (see [`words`]) and re-joined in the
//! requested [`Case`]. The `id` acronym follows the Go naming convention:
//! it is `id` in snake/kebab case and `ID` everywhere a word would be
//! capitalized.
//!
//! ```rust
//! use tagcase::{to_camel_case, to_pascal_case, to_snake_case, to_slug, to_uncased};
//!
//! assert_eq!(to_snake_case("inviteYourCustomersAddInvites"), "invite_your_customers_add_invites");
//! assert_eq!(to_snake_case("sampleTextID"), "sample_text_id");
//! assert_eq!(to_camel_case("sample-id-text"), "sampleIDText");
//! assert_eq!(to_pascal_case("id-sampleText"), "IDSampleText");
//! assert_eq!(to_uncased("user_id"), "User ID");
//! assert_eq!(to_slug("•¶§ƒ˚foo˙∆˚¬"), "foo");
//! ```
//!
//! Conversion is total: empty input and input without letters or digits
//! produce an empty string.
//!
//! ## Tag Strings
//!
//! [`TagString`] edits `key:"value"` annotation lists in place, keeping the
//! original formatting of everything it does not touch.
//!
//! ```rust
//! use tagcase::TagString;
//!
//! let mut tag = TagString::from(r#"col:"user_id" json:"userId""#);
//! tag.add("db", "users");
//! assert!(tag.set("json", "userID,omitempty"));
//! tag.remove("col").unwrap();
//! assert_eq!(tag, r#"json:"userID,omitempty" db:"users""#);
//! ```
//!
//! The `protobuf` tag written by protobuf code generators can be decoded
//! into a [`ProtobufInfo`]:
//!
//! ```rust
//! use tagcase::TagString;
//!
//! let tag = TagString::from(r#"protobuf:"bytes,9,rep,name=votes" json:"votes,omitempty""#);
//! let info = tag.protobuf_info().unwrap();
//! assert_eq!(info.tag_number, 9);
//! assert!(info.repeated);
//! ```
//!
//! ## Logging
//!
//! Mutations that are refused or have nothing to act on are reported through
//! the [`log`](https://docs.rs/log) facade at `debug` and `warn` level. The
//! crate never installs a logger. [`caller::print_call_stack`] logs the
//! current stack at `info` level for callers that want to trace where a
//! conversion came from.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API
//! - Every operation is linear in the size of its input

pub mod caller;
pub mod case;
pub mod distinct;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod protobuf;
pub mod tag;
pub mod words;

pub use case::Case;
pub use distinct::distinct;
pub use error::{Error, Result};
pub use map::TagMap;
pub use options::TagOptions;
pub use protobuf::ProtobufInfo;
pub use tag::TagString;

/// Converts `s` to `snake_case`.
///
/// # Examples
///
/// ```rust
/// use tagcase::to_snake_case;
///
/// assert_eq!(to_snake_case("sampleIDText"), "sample_id_text");
/// assert_eq!(to_snake_case("   $#$sample   2    Text   "), "sample_2_text");
/// ```
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    Case::Snake.apply(s)
}

/// Converts `s` to `kebab-case`.
#[must_use]
pub fn to_kebab_case(s: &str) -> String {
    Case::Kebab.apply(s)
}

/// Converts `s` to a URL slug. Identical to [`to_kebab_case`].
#[must_use]
pub fn to_slug(s: &str) -> String {
    Case::Slug.apply(s)
}

/// Converts `s` to `camelCase`.
///
/// Applying it twice gives the same result, except around bare `id` words
/// and one-letter words. A one-letter word is capitalized and then merges
/// with its neighbour on the next pass: `"0A$a"` gives `"0AA"`, where `AA`
/// is read back as one word, giving `"0Aa"`.
///
/// # Examples
///
/// ```rust
/// use tagcase::to_camel_case;
///
/// assert_eq!(to_camel_case("FOO:BAR$BAZ"), "fooBarBaz");
/// assert_eq!(to_camel_case("user id"), "userID");
/// ```
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    Case::Camel.apply(s)
}

/// Converts `s` to `PascalCase`.
///
/// The same one-letter caveat as [`to_camel_case`] applies: `"A$a"` gives
/// `"AA"`, and `"AA"` gives `"Aa"`.
///
/// # Examples
///
/// ```rust
/// use tagcase::to_pascal_case;
///
/// assert_eq!(to_pascal_case("id"), "ID");
/// assert_eq!(to_pascal_case("___$$Base64Encode"), "Base64Encode");
/// ```
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    Case::Pascal.apply(s)
}

/// Converts `s` to human-readable text with the first letter capitalized.
///
/// # Examples
///
/// ```rust
/// use tagcase::to_uncased;
///
/// assert_eq!(to_uncased("SAMPLE 2 TEXT"), "Sample 2 text");
/// ```
#[must_use]
pub fn to_uncased(s: &str) -> String {
    Case::Uncased.apply(s)
}
