//! In-memory, append-only sequence of recorded entries.
//!
//! # Invariants
//! - Insertion order is preserved; entries are never reordered or removed.
//! - No deduplication and no capacity bound.
//! - The log is owned by the caller and lives only as long as the process.

use crate::model::entry::{EntryId, SleepEntry};
use crate::service::entry_service::submit_entry;
use crate::validation::error::ValidationError;

/// Ordered log of sleep entries for the running session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SleepLog {
    entries: Vec<SleepEntry>,
}

impl SleepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry at the end and returns its ID.
    pub fn append(&mut self, entry: SleepEntry) -> EntryId {
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    /// Runs the submission gate and appends the entry on success.
    ///
    /// The log is left untouched when validation fails.
    pub fn submit(
        &mut self,
        date: &str,
        sleep_time: &str,
        wake_time: &str,
    ) -> Result<EntryId, ValidationError> {
        let entry = submit_entry(date, sleep_time, wake_time)?;
        Ok(self.append(entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[SleepEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SleepEntry> {
        self.entries.iter()
    }

    /// Looks up an entry by its list key.
    pub fn get(&self, id: EntryId) -> Option<&SleepEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }
}

impl<'a> IntoIterator for &'a SleepLog {
    type Item = &'a SleepEntry;
    type IntoIter = std::slice::Iter<'a, SleepEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SleepLog;
    use crate::model::entry::EntryField;
    use crate::validation::error::ValidationError;

    #[test]
    fn submit_appends_in_order() {
        let mut log = SleepLog::new();
        let first = log.submit("2024-12-20", "23:00", "07:00").expect("first");
        let second = log.submit("2024-12-21", "22:00", "07:00").expect("second");

        let ids: Vec<_> = log.iter().map(|entry| entry.id()).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(log.get(second).map(|entry| entry.duration()), Some("9h 0m"));
    }

    #[test]
    fn rejected_submit_leaves_log_untouched() {
        let mut log = SleepLog::new();
        log.submit("2024-12-20", "23:00", "07:00").expect("seed");
        let before = log.clone();

        let err = log.submit("2024-12-21", "", "07:00").unwrap_err();
        assert_eq!(err, ValidationError::MissingField(EntryField::SleepTime));
        assert_eq!(log, before);
    }

    #[test]
    fn identical_inputs_are_not_deduplicated() {
        let mut log = SleepLog::new();
        let a = log.submit("2024-12-21", "22:00", "07:00").expect("a");
        let b = log.submit("2024-12-21", "22:00", "07:00").expect("b");
        assert_ne!(a, b);
        assert_eq!(log.len(), 2);
    }
}
