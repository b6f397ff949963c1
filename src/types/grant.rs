//! The call contract for reporting a granted access.
//!
//! A dispatching daemon hands the journal one [`AccessGrant`] per grant. The
//! grant carries the full argument list of the dispatch hook, including
//! fields the journal accepts but does not persist.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of the action that was granted, as carried on the
/// dispatch wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionCode(pub u32);

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ActionCode {
    fn from(code: u32) -> Self {
        ActionCode(code)
    }
}

/// One granted access, as reported by the dispatching daemon.
///
/// `ip`, `user`, and `comment` are persisted (the comment after
/// normalization, see [`crate::journal::comment`]). `action_code`,
/// `action_name`, and `payload` complete the hook's argument list and are
/// accepted so callers need no second code path, but they are not written to
/// the log: the record's key set is closed, and readers rely on that.
/// Persisting them would be a schema change, not a bug fix; do not add them
/// as a side effect of some other edit.
///
/// `ip` and `user` are deliberately plain strings. The journal stores them
/// verbatim and never validates, parses, or canonicalizes either one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    /// Source address of the grantee.
    pub ip: String,
    /// Actor identity.
    pub user: String,
    /// Free-form comment attached to the grant. May be empty, may contain
    /// NUL or non-ASCII bytes; normalization happens at append time.
    pub comment: String,
    /// Numeric action identifier. Accepted, not persisted.
    pub action_code: ActionCode,
    /// Configured name of the granted action. Accepted, not persisted.
    pub action_name: String,
    /// Raw action payload bytes. Accepted, not persisted.
    pub payload: Vec<u8>,
}

impl AccessGrant {
    /// Creates a grant from the full hook argument list.
    pub fn new(
        ip: impl Into<String>,
        user: impl Into<String>,
        comment: impl Into<String>,
        action_code: ActionCode,
        action_name: impl Into<String>,
        payload: Vec<u8>,
    ) -> Self {
        AccessGrant {
            ip: ip.into(),
            user: user.into(),
            comment: comment.into(),
            action_code,
            action_name: action_name.into(),
            payload,
        }
    }
}
