//! Journal layer: how a granted access becomes a line on disk.
//!
//! This module turns an [`crate::types::AccessGrant`] into a persisted
//! [`AccessRecord`] and appends it to a shared JSON Lines file.
//!
//! # Record format
//!
//! One JSON object per line, keys in this order:
//!
//! ```text
//! {"ip":"203.0.113.9","user":"alice","comment":"login ok\u0000",
//!  "timestamp":"2025-06-01T12:00:00+02:00","b64":false}
//! ```
//!
//! `unicode:true` appears as a final key on records whose comment went
//! through base64. Forward slashes are stored unescaped, and control
//! characters (including the NUL terminator) are stored as JSON `\u` escapes,
//! so a record never spans more than one physical line.
//!
//! # Pipeline
//!
//! 1. [`comment::encode_comment`] normalizes the comment and decides the
//!    `b64`/`unicode` flags.
//! 2. [`record::AccessRecord::new`] stamps the local time.
//! 3. [`append::AccessLog::record_access`] serializes and appends the line
//!    with a single write.

pub mod append;
pub mod comment;
pub mod record;

pub use append::{AccessLog, AccessLogError, Result};
pub use comment::{CommentEncoding, EMPTY_COMMENT_PLACEHOLDER, EncodedComment, encode_comment};
pub use record::AccessRecord;
