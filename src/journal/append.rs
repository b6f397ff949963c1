//! Append-only access log in JSON Lines format.
//!
//! The log uses JSON Lines format: one JSON object per line, each a
//! complete [`AccessRecord`]. The file stays tail-able and grep-able while
//! it is being written.
//!
//! # Concurrency
//!
//! Every append opens the file in append mode and writes the whole line
//! with a single write call. Interleaving between concurrent writers,
//! whether threads or separate processes, therefore happens at line
//! granularity only; the operating system's append semantics provide that
//! guarantee and no locking is done here.
//!
//! # Durability and failure
//!
//! The appender holds no open handle and keeps no state between calls:
//! open, append, release. Nothing is fsynced. A failed call leaves the
//! target exactly as it was, because the record is serialized before the
//! file is opened and the line is written in one call.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::comment::encode_comment;
use super::record::AccessRecord;
use crate::types::AccessGrant;

/// Errors that can occur during access log operations.
#[derive(Debug, Error)]
pub enum AccessLogError {
    /// IO error while opening, writing, or reading the target.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error. Serializing a well-formed
    /// record does not fail in practice; this arm mostly surfaces malformed
    /// lines found by [`AccessLog::read_all`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 input that should have been decodable was not, such as a
    /// payload argument handed to the `gatelog` binary.
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result type for access log operations.
pub type Result<T> = std::result::Result<T, AccessLogError>;

/// An append-only access log bound to a target path.
///
/// The path is injected at construction; nothing in this crate hard-codes a
/// log location. `record_access` takes `&self` and performs no internal
/// coordination, so one instance may be shared freely across threads, and
/// several processes may target the same file.
#[derive(Debug, Clone)]
pub struct AccessLog {
    /// Path to the log file.
    path: PathBuf,
}

impl AccessLog {
    /// Creates an access log targeting `path`.
    ///
    /// The file is not touched until the first append, and is created then
    /// if absent. Parent directories are never created: a missing directory
    /// surfaces as an IO error at append time, like any other unwritable
    /// target.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AccessLog { path: path.into() }
    }

    /// Returns the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records one granted access.
    ///
    /// Normalizes the grant's comment, stamps the current local time, and
    /// appends the serialized record as one line. Exactly one line is
    /// appended per successful call and none on failure.
    ///
    /// The grant's `action_code`, `action_name`, and `payload` are accepted
    /// but not persisted; see [`AccessGrant`].
    ///
    /// Returns the complete record that was written.
    pub fn record_access(&self, grant: &AccessGrant) -> Result<AccessRecord> {
        let record = AccessRecord::new(
            grant.ip.clone(),
            grant.user.clone(),
            encode_comment(&grant.comment),
        );

        // Serialize before opening: a record that cannot be serialized must
        // leave the target untouched.
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // One write call for the whole line keeps concurrent appenders
        // line-atomic.
        file.write_all(&line)?;

        Ok(record)
    }

    /// Reads every record currently in the target, in file order.
    ///
    /// Blank lines are skipped; a line that does not parse as a record is an
    /// error. The file is never modified, so this doubles as a verification
    /// pass over a log other writers are still appending to.
    ///
    /// A missing target reads as empty.
    pub fn read_all(&self) -> Result<Vec<AccessRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }

        Ok(records)
    }
}
