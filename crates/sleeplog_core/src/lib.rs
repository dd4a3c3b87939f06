//! Core domain logic for SleepLog.
//! This crate is the single source of truth for entry validation and
//! duration invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::duration::{calculate_duration, SleepDuration, TimeOfDay, MINUTES_PER_DAY};
pub use model::entry::{EntryField, EntryId, SleepEntry};
pub use model::sleep_log::SleepLog;
pub use service::draft::EntryDraft;
pub use service::entry_service::submit_entry;
pub use validation::error::ValidationError;
pub use validation::format::{is_valid_date_format, is_valid_time_format};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
