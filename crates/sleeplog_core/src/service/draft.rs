//! Entry form draft.
//!
//! # Responsibility
//! - Hold the three raw form fields between edits.
//! - Apply the submit side effects against a caller-owned `SleepLog`.
//!
//! # Invariants
//! - Success appends exactly one entry and clears every field.
//! - Failure changes neither the log nor the fields.

use crate::model::entry::{EntryField, EntryId};
use crate::model::sleep_log::SleepLog;
use crate::validation::error::ValidationError;

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    date: String,
    sleep_time: String,
    wake_time: String,
}

impl EntryDraft {
    pub fn new(
        date: impl Into<String>,
        sleep_time: impl Into<String>,
        wake_time: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            sleep_time: sleep_time.into(),
            wake_time: wake_time.into(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn sleep_time(&self) -> &str {
        &self.sleep_time
    }

    pub fn wake_time(&self) -> &str {
        &self.wake_time
    }

    /// Replaces one field with the latest text from the shell.
    pub fn set(&mut self, field: EntryField, value: impl Into<String>) {
        let slot = match field {
            EntryField::Date => &mut self.date,
            EntryField::SleepTime => &mut self.sleep_time,
            EntryField::WakeTime => &mut self.wake_time,
        };
        *slot = value.into();
    }

    /// Returns whether every field is empty.
    pub fn is_blank(&self) -> bool {
        self.date.is_empty() && self.sleep_time.is_empty() && self.wake_time.is_empty()
    }

    pub fn clear(&mut self) {
        self.date.clear();
        self.sleep_time.clear();
        self.wake_time.clear();
    }

    /// Submits the draft into `log`.
    ///
    /// Returns the new entry ID and clears the draft on success. On failure
    /// the draft keeps its text so the user can correct it.
    pub fn submit_into(&mut self, log: &mut SleepLog) -> Result<EntryId, ValidationError> {
        let id = log.submit(&self.date, &self.sleep_time, &self.wake_time)?;
        self.clear();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::EntryDraft;
    use crate::model::entry::EntryField;

    #[test]
    fn set_updates_single_field() {
        let mut draft = EntryDraft::default();
        assert!(draft.is_blank());

        draft.set(EntryField::SleepTime, "22:15");
        assert_eq!(draft.sleep_time(), "22:15");
        assert_eq!(draft.date(), "");
        assert!(!draft.is_blank());
    }
}
