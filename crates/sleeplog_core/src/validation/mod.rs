//! Input shape checks for the entry form.
//!
//! # Responsibility
//! - Decide whether raw date/time strings have an acceptable shape.
//! - Define the error taxonomy surfaced by the submission gate.
//!
//! # Invariants
//! - Checks are shape-only: calendar validity is never evaluated.
//! - Single-digit hour/minute components stay accepted.
//! - Exactly one error per attempt, in order missing -> date -> time.

pub mod error;
pub mod format;
pub mod gate;
