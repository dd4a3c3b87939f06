//! Time-of-day parsing and elapsed sleep duration.
//!
//! # Invariants
//! - `TimeOfDay` only exists for strings that passed the time shape check.
//! - `SleepDuration` is always in `0..MINUTES_PER_DAY`.
//! - Wraparound applies only when wake is strictly earlier than sleep, so
//!   equal times yield zero, never a full day.

use crate::model::entry::EntryField;
use crate::validation::error::ValidationError;
use crate::validation::format::is_valid_time_format;
use std::fmt::{Display, Formatter};

/// Minutes added when a session crosses midnight.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parsed 24-hour time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Parses `H:M`/`HH:MM` text.
    ///
    /// Returns `None` when `value` fails the time shape check.
    pub fn parse(value: &str) -> Option<Self> {
        if !is_valid_time_format(value) {
            return None;
        }
        let (hour, minute) = value.split_once(':')?;
        Some(Self {
            hour: hour.parse().ok()?,
            minute: minute.parse().ok()?,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

/// Elapsed sleep between two times of day, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SleepDuration {
    total_minutes: u32,
}

impl SleepDuration {
    /// Computes the duration from `sleep` to `wake`, wrapping past midnight
    /// when `wake` is earlier than `sleep`.
    pub fn between(sleep: TimeOfDay, wake: TimeOfDay) -> Self {
        let sleep_minutes = sleep.minutes_since_midnight();
        let wake_minutes = wake.minutes_since_midnight();
        let total_minutes = if wake_minutes < sleep_minutes {
            wake_minutes + MINUTES_PER_DAY - sleep_minutes
        } else {
            wake_minutes - sleep_minutes
        };
        Self { total_minutes }
    }

    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    pub fn hours(&self) -> u32 {
        self.total_minutes / 60
    }

    /// Minutes past the last whole hour.
    pub fn minutes(&self) -> u32 {
        self.total_minutes % 60
    }
}

impl Display for SleepDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours(), self.minutes())
    }
}

/// Formats the sleep duration between two raw `HH:MM` strings as `"{h}h {m}m"`.
///
/// # Errors
/// - `InvalidTimeFormat(SleepTime)` when `sleep` fails the shape check.
/// - `InvalidTimeFormat(WakeTime)` when `wake` fails the shape check.
pub fn calculate_duration(sleep: &str, wake: &str) -> Result<String, ValidationError> {
    let sleep =
        TimeOfDay::parse(sleep).ok_or(ValidationError::InvalidTimeFormat(EntryField::SleepTime))?;
    let wake =
        TimeOfDay::parse(wake).ok_or(ValidationError::InvalidTimeFormat(EntryField::WakeTime))?;
    Ok(SleepDuration::between(sleep, wake).to_string())
}
