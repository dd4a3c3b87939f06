//! Entry submission gate.
//!
//! # Responsibility
//! - Validate three raw strings and assemble a `SleepEntry`.
//! - Emit metadata-only diagnostics for each attempt.
//!
//! # Invariants
//! - Stateless: appending and clearing inputs are caller side effects.
//! - Raw user input never reaches the log output.

use crate::model::duration::SleepDuration;
use crate::model::entry::SleepEntry;
use crate::validation::error::ValidationError;
use crate::validation::gate::validate_inputs;
use log::info;
use uuid::Uuid;

/// Validates raw form input and assembles a new entry with a fresh ID.
///
/// # Errors
/// - `MissingField` if any input is empty.
/// - `InvalidDateFormat` if the date is not shaped `YYYY-MM-DD`.
/// - `InvalidTimeFormat` if either time is not shaped `HH:MM`.
pub fn submit_entry(
    date: &str,
    sleep_time: &str,
    wake_time: &str,
) -> Result<SleepEntry, ValidationError> {
    let (sleep, wake) = validate_inputs(date, sleep_time, wake_time).map_err(|err| {
        info!(
            "event=entry_submit module=entry status=rejected reason={} field={}",
            err.code(),
            err.field().as_str()
        );
        err
    })?;

    let duration = SleepDuration::between(sleep, wake);
    let entry = SleepEntry::assemble(
        Uuid::new_v4(),
        date.to_owned(),
        sleep_time.to_owned(),
        wake_time.to_owned(),
        duration,
    );
    info!(
        "event=entry_submit module=entry status=ok entry_id={} duration_minutes={}",
        entry.id(),
        duration.total_minutes()
    );
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::submit_entry;

    #[test]
    fn assigns_fresh_ids() {
        let a = submit_entry("2024-12-21", "22:00", "07:00").expect("a");
        let b = submit_entry("2024-12-21", "22:00", "07:00").expect("b");
        assert_ne!(a.id(), b.id());
        assert!(!a.id().is_nil());
    }
}
