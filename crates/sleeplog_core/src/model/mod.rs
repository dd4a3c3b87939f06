//! Domain model for recorded sleep sessions.
//!
//! # Responsibility
//! - Define the canonical entry record rendered by the list view.
//! - Own the duration arithmetic and the append-only session log.
//!
//! # Invariants
//! - Every entry is identified by a stable, never reused `EntryId`.
//! - `duration` is always derived from the two times, never supplied.
//! - Entries are immutable once assembled.

pub mod duration;
pub mod entry;
pub mod sleep_log;
