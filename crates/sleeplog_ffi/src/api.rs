//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the process-wide sleep log on behalf of the mobile shell.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The log is append-only and lives only for the current process.
//! - Error messages are the user-facing alert texts from core.

use log::warn;
use sleeplog_core::{
    calculate_duration, core_version as core_version_inner, init_logging as init_logging_inner,
    is_valid_date_format, is_valid_time_format, ping as ping_inner, SleepEntry, SleepLog,
    ValidationError,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static SLEEP_LOG: OnceLock<Mutex<SleepLog>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// List row projection of one sleep entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepEntryItem {
    /// Stable entry ID in string form, used as list key.
    pub entry_id: String,
    pub date: String,
    pub sleep_time: String,
    pub wake_time: String,
    /// Formatted `"{h}h {m}m"` duration.
    pub duration: String,
}

/// Response envelope for the add-entry form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether the entry was recorded.
    pub ok: bool,
    /// Created entry ID on success.
    pub entry_id: Option<String>,
    /// Stable error code (`missing_field|invalid_date_format|invalid_time_format`).
    pub error_code: Option<String>,
    /// Field the UI should focus on failure (`date|sleep_time|wake_time`).
    pub error_field: Option<String>,
    /// Human-readable message for the alert dialog.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, entry_id: String) -> Self {
        Self {
            ok: true,
            entry_id: Some(entry_id),
            error_code: None,
            error_field: None,
            message: message.into(),
        }
    }

    fn failure(err: ValidationError) -> Self {
        Self {
            ok: false,
            entry_id: None,
            error_code: Some(err.code().to_string()),
            error_field: Some(err.field().as_str().to_string()),
            message: err.to_string(),
        }
    }
}

/// Returns whether `date` has the `YYYY-MM-DD` shape.
#[flutter_rust_bridge::frb(sync)]
pub fn sleep_is_valid_date(date: String) -> bool {
    is_valid_date_format(date.as_str())
}

/// Returns whether `time` has the `HH:MM` 24-hour shape.
#[flutter_rust_bridge::frb(sync)]
pub fn sleep_is_valid_time(time: String) -> bool {
    is_valid_time_format(time.as_str())
}

/// Previews the duration for the current form input.
///
/// Returns `None` when either time is malformed.
#[flutter_rust_bridge::frb(sync)]
pub fn sleep_calculate_duration(sleep_time: String, wake_time: String) -> Option<String> {
    calculate_duration(sleep_time.as_str(), wake_time.as_str()).ok()
}

/// Validates form input and appends the entry to the session log.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
/// - On failure the log is unchanged and the shell keeps its fields.
#[flutter_rust_bridge::frb(sync)]
pub fn sleep_add_entry(date: String, sleep_time: String, wake_time: String) -> EntryActionResponse {
    let mut log = lock_sleep_log();
    match log.submit(date.as_str(), sleep_time.as_str(), wake_time.as_str()) {
        Ok(entry_id) => EntryActionResponse::success("Entry added.", entry_id.to_string()),
        Err(err) => EntryActionResponse::failure(err),
    }
}

/// Lists recorded entries in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn sleep_list_entries() -> Vec<SleepEntryItem> {
    lock_sleep_log().iter().map(to_sleep_entry_item).collect()
}

/// Number of entries recorded in this process.
#[flutter_rust_bridge::frb(sync)]
pub fn sleep_entry_count() -> u32 {
    u32::try_from(lock_sleep_log().len()).unwrap_or(u32::MAX)
}

fn lock_sleep_log() -> MutexGuard<'static, SleepLog> {
    let log = SLEEP_LOG.get_or_init(|| Mutex::new(SleepLog::new()));
    log.lock().unwrap_or_else(|poisoned| {
        // Appends are single pushes, so a poisoned log is still consistent.
        warn!("event=sleep_log_lock module=ffi status=recovered");
        poisoned.into_inner()
    })
}

fn to_sleep_entry_item(entry: &SleepEntry) -> SleepEntryItem {
    SleepEntryItem {
        entry_id: entry.id().to_string(),
        date: entry.date().to_string(),
        sleep_time: entry.sleep_time().to_string(),
        wake_time: entry.wake_time().to_string(),
        duration: entry.duration().to_string(),
    }
}
