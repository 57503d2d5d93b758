//! Decoding of the `protobuf` struct tag.
//!
//! Generated protobuf code annotates each field with a comma-separated value:
//!
//! ```text
//! protobuf:"varint,5,opt,name=type,json=type,proto3,enum=models.CommentType"
//! ```
//!
//! The first three tokens are positional: wire type, field number, and a
//! label (`opt`, `req` or `rep`). The rest are flags or `key=value` pairs in
//! any order; unknown ones are ignored.
//!
//! Decoding never fails. A field number that does not parse becomes `0`,
//! and missing positional tokens leave the matching fields empty.
//!
//! ## Examples
//!
//! ```rust
//! use tagcase::TagString;
//!
//! let tag = TagString::from(r#"protobuf:"bytes,4,opt,name=comment,proto3" json:"comment""#);
//! let info = tag.protobuf_info().unwrap();
//! assert_eq!(info.wire_type, "bytes");
//! assert_eq!(info.tag_number, 4);
//! assert!(info.optional && info.proto3);
//! assert_eq!(info.name.as_deref(), Some("comment"));
//!
//! assert!(TagString::from(r#"json:"x""#).protobuf_info().is_none());
//! ```

use crate::TagString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag key holding the protobuf field description.
pub const PROTOBUF_KEY: &str = "protobuf";

/// Decoded contents of a `protobuf` tag value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtobufInfo {
    /// Wire encoding, e.g. `bytes` or `varint`
    pub wire_type: String,
    /// Field number; `0` when the token is not a non-negative integer
    pub tag_number: u32,
    /// Set by `opt` and `rep`, and forced on by `proto3`
    pub optional: bool,
    /// Set by `req`
    pub required: bool,
    /// Set by `rep`
    pub repeated: bool,
    /// `packed` flag (repeated primitives only)
    pub packed: bool,
    /// `name=`, the field name as declared in the .proto file
    pub name: Option<String>,
    /// `json=`, the JSON name when it differs from `name`
    pub json_name: Option<String>,
    /// `enum=`, the enum type of an enum-typed field
    pub enum_type: Option<String>,
    /// `def=`, the default value; always the last token and may contain commas
    pub default: Option<String>,
    /// `proto3` flag
    pub proto3: bool,
}

impl ProtobufInfo {
    /// Decodes a `protobuf` tag value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagcase::ProtobufInfo;
    ///
    /// let info = ProtobufInfo::decode("bytes,9,rep,name=votes");
    /// assert!(info.repeated && info.optional);
    /// assert!(!info.proto3);
    /// ```
    #[must_use]
    pub fn decode(value: &str) -> Self {
        let mut info = ProtobufInfo::default();
        let mut offset = 0;

        for (index, token) in value.split(',').enumerate() {
            match index {
                0 => info.wire_type = token.to_string(),
                // TODO: report a malformed field number instead of decoding it as 0
                1 => info.tag_number = token.parse().unwrap_or(0),
                2 => match token {
                    "opt" => info.optional = true,
                    "req" => info.required = true,
                    "rep" => {
                        info.optional = true;
                        info.repeated = true;
                    }
                    _ => {}
                },
                _ => {
                    if token.starts_with("def=") {
                        info.default = Some(value[offset + "def=".len()..].to_string());
                        break;
                    }
                    info.apply_option(token);
                }
            }
            offset += token.len() + 1;
        }

        // proto3 has no required fields
        if info.proto3 {
            info.optional = true;
        }
        info
    }

    fn apply_option(&mut self, token: &str) {
        match token {
            "proto3" => self.proto3 = true,
            "packed" => self.packed = true,
            _ => {
                if let Some(name) = token.strip_prefix("name=") {
                    self.name = Some(name.to_string());
                } else if let Some(json) = token.strip_prefix("json=") {
                    self.json_name = Some(json.to_string());
                } else if let Some(enum_type) = token.strip_prefix("enum=") {
                    self.enum_type = Some(enum_type.to_string());
                }
            }
        }
    }

    /// Label token for the current flags: `rep`, `req`, `opt` or empty.
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.repeated {
            "rep"
        } else if self.required {
            "req"
        } else if self.optional {
            "opt"
        } else {
            ""
        }
    }
}

impl fmt::Display for ProtobufInfo {
    /// Encodes the record back into a tag value, in the token order used by
    /// protoc-gen-go.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.wire_type, self.tag_number, self.label())?;
        if self.packed {
            f.write_str(",packed")?;
        }
        if let Some(name) = &self.name {
            write!(f, ",name={name}")?;
        }
        if let Some(json) = &self.json_name {
            write!(f, ",json={json}")?;
        }
        if self.proto3 {
            f.write_str(",proto3")?;
        }
        if let Some(enum_type) = &self.enum_type {
            write!(f, ",enum={enum_type}")?;
        }
        if let Some(default) = &self.default {
            write!(f, ",def={default}")?;
        }
        Ok(())
    }
}

impl TagString {
    /// Decodes the `protobuf` pair, or returns `None` when the tag has none.
    ///
    /// A present but empty value decodes to a record with an empty wire type.
    #[must_use]
    pub fn protobuf_info(&self) -> Option<ProtobufInfo> {
        self.lookup(PROTOBUF_KEY).map(ProtobufInfo::decode)
    }

    /// Writes `info` into the `protobuf` pair, adding the pair if needed.
    pub fn set_protobuf_info(&mut self, info: &ProtobufInfo) {
        self.add(PROTOBUF_KEY, &info.to_string());
    }
}
