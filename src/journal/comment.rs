//! Comment normalization for safe single-line storage.
//!
//! Comments arrive as arbitrary strings and end up inside a line-delimited
//! JSON file. Normalization keeps plain ASCII comments readable in the file
//! and pushes everything else through base64:
//!
//! - an empty comment becomes a single NUL character, so a stored comment is
//!   never the empty string;
//! - a comment containing any non-ASCII byte becomes the base64 encoding of
//!   its raw bytes;
//! - any other comment is stored as-is, gaining a trailing NUL if it does
//!   not already end in one.
//!
//! Classification is byte-level on purpose. The boundary is "fits in 7-bit
//! ASCII", not any higher-level notion of text, so a single accented
//! character is enough to route the whole comment through base64.

use base64::{Engine, engine::general_purpose::STANDARD};

/// Placeholder stored in place of an empty comment.
pub const EMPTY_COMMENT_PLACEHOLDER: &str = "\0";

/// How a comment was transformed for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentEncoding {
    /// Stored as ASCII text ending in a NUL terminator.
    Plain,
    /// Stored as base64 of the original bytes.
    Base64,
}

/// The storage form of a comment, together with how it was produced.
///
/// `encoding` is the single source of truth for the record's flag pair:
/// `Base64` means both `b64` and `unicode` are set, `Plain` means neither
/// is. Keeping one enum rather than two booleans makes a disagreeing pair
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedComment {
    /// The text to persist in the record's `comment` field.
    pub text: String,
    /// The transformation that produced `text`.
    pub encoding: CommentEncoding,
}

impl EncodedComment {
    /// True if `text` must be base64-decoded to recover the original bytes.
    pub fn is_base64(&self) -> bool {
        self.encoding == CommentEncoding::Base64
    }
}

/// Normalizes a raw comment for storage.
///
/// Rules, checked in order:
///
/// 1. empty input: the NUL placeholder, [`CommentEncoding::Plain`];
/// 2. any byte outside ASCII: standard padded base64 of the raw bytes,
///    [`CommentEncoding::Base64`];
/// 3. otherwise: the input itself, with a trailing NUL appended unless one
///    is already there, [`CommentEncoding::Plain`].
///
/// Deterministic: equal inputs always produce equal results.
pub fn encode_comment(raw: &str) -> EncodedComment {
    if raw.is_empty() {
        return EncodedComment {
            text: EMPTY_COMMENT_PLACEHOLDER.to_string(),
            encoding: CommentEncoding::Plain,
        };
    }

    if !raw.is_ascii() {
        return EncodedComment {
            text: STANDARD.encode(raw.as_bytes()),
            encoding: CommentEncoding::Base64,
        };
    }

    let text = if raw.ends_with('\0') {
        raw.to_string()
    } else {
        let mut terminated = String::with_capacity(raw.len() + 1);
        terminated.push_str(raw);
        terminated.push('\0');
        terminated
    };

    EncodedComment {
        text,
        encoding: CommentEncoding::Plain,
    }
}
