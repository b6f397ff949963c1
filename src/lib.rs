//! Gatelog - append-only JSON Lines logging of granted accesses.
//!
//! A gate daemon that has decided to let someone in calls this crate (or the
//! `gatelog` binary) to leave a durable trace of that decision. Each grant
//! becomes one self-describing JSON object on its own line in a shared log
//! file, so the file can be tailed, grepped, and parsed line by line while
//! the daemon keeps writing to it.
//!
//! The [`journal`] module owns the storage side: comment normalization, the
//! record schema, and the append itself. The [`types`] module carries the
//! call contract a dispatching daemon uses to hand a grant over.

pub mod journal;
pub mod types;
