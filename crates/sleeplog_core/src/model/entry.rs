//! Sleep entry domain model.
//!
//! # Responsibility
//! - Define the canonical record shown as one row of the sleep list.
//! - Provide the row projection rendered by shells.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `date`, `sleep_time` and `wake_time` passed the validation gate and are
//!   kept exactly as typed.
//! - `duration` is recomputed from the two times, including on deserialize.

use crate::model::duration::SleepDuration;
use crate::validation::error::ValidationError;
use crate::validation::gate::validate_inputs;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one recorded sleep session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// One of the three raw inputs of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// Time the session started, `HH:MM`.
    SleepTime,
    /// Time the session ended, `HH:MM`.
    WakeTime,
}

impl EntryField {
    /// Stable snake_case name used in logs and FFI payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::SleepTime => "sleep_time",
            Self::WakeTime => "wake_time",
        }
    }

    /// Row/placeholder label shown next to the value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::SleepTime => "Sleep Time",
            Self::WakeTime => "Wake Time",
        }
    }
}

/// One recorded sleep session.
///
/// Serialized with camelCase names to match the list-row record consumed by
/// the mobile shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SleepEntryWire")]
pub struct SleepEntry {
    id: EntryId,
    date: String,
    sleep_time: String,
    wake_time: String,
    duration: String,
}

impl SleepEntry {
    /// Assembles an entry with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally. Runs
    /// the same validation gate as submission, without emitting log events.
    ///
    /// # Errors
    /// - Returns the first failing `ValidationError`.
    pub fn with_id(
        id: EntryId,
        date: impl Into<String>,
        sleep_time: impl Into<String>,
        wake_time: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let date = date.into();
        let sleep_time = sleep_time.into();
        let wake_time = wake_time.into();
        let (sleep, wake) = validate_inputs(&date, &sleep_time, &wake_time)?;
        Ok(Self::assemble(
            id,
            date,
            sleep_time,
            wake_time,
            SleepDuration::between(sleep, wake),
        ))
    }

    pub(crate) fn assemble(
        id: EntryId,
        date: String,
        sleep_time: String,
        wake_time: String,
        duration: SleepDuration,
    ) -> Self {
        Self {
            id,
            date,
            sleep_time,
            wake_time,
            duration: duration.to_string(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
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

    /// Formatted `"{h}h {m}m"` duration.
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Plain-text lines displayed for this entry in the list view.
    pub fn row_lines(&self) -> [String; 4] {
        [
            format!("{}: {}", EntryField::Date.label(), self.date),
            format!("{}: {}", EntryField::SleepTime.label(), self.sleep_time),
            format!("{}: {}", EntryField::WakeTime.label(), self.wake_time),
            format!("Duration: {}", self.duration),
        ]
    }
}

/// Inbound wire shape; any supplied `duration` is ignored and recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SleepEntryWire {
    id: EntryId,
    date: String,
    sleep_time: String,
    wake_time: String,
}

impl TryFrom<SleepEntryWire> for SleepEntry {
    type Error = ValidationError;

    fn try_from(value: SleepEntryWire) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.date, value.sleep_time, value.wake_time)
    }
}
