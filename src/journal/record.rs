//! The persisted access record.
//!
//! One record per granted access, serialized as a single JSON object whose
//! key set is closed: `ip`, `user`, `comment`, `timestamp`, `b64`, and, on
//! base64 records only, `unicode`. Struct field order below is the wire
//! order.

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

use super::comment::EncodedComment;

/// A single access-log record.
///
/// Records are self-describing: `b64` tells a reader whether `comment` must
/// be base64-decoded, with no state outside the record itself. `unicode` is
/// either absent or `true`; it is never written as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// Source address of the grantee, stored verbatim.
    pub ip: String,
    /// Actor identity, stored verbatim.
    pub user: String,
    /// Normalized comment text (see [`super::comment::encode_comment`]).
    pub comment: String,
    /// Record-creation time: local clock, serialized with its UTC offset.
    pub timestamp: DateTime<FixedOffset>,
    /// True iff `comment` is base64-encoded.
    pub b64: bool,
    /// Present (and true) iff the original comment contained non-ASCII
    /// bytes. Absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode: Option<bool>,
}

impl AccessRecord {
    /// Assembles a record from the identity fields and an already-encoded
    /// comment, stamping the current local time.
    pub fn new(ip: impl Into<String>, user: impl Into<String>, comment: EncodedComment) -> Self {
        let base64 = comment.is_base64();
        AccessRecord {
            ip: ip.into(),
            user: user.into(),
            comment: comment.text,
            timestamp: Local::now().fixed_offset(),
            b64: base64,
            unicode: if base64 { Some(true) } else { None },
        }
    }

    /// Recovers the comment bytes a consumer should work with.
    ///
    /// Base64 records decode back to the exact bytes of the original input;
    /// plain records return the stored text (placeholder or NUL-terminated
    /// ASCII) as bytes.
    pub fn decoded_comment(&self) -> Result<Vec<u8>, base64::DecodeError> {
        if self.b64 {
            STANDARD.decode(&self.comment)
        } else {
            Ok(self.comment.clone().into_bytes())
        }
    }
}
