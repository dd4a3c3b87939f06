//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sleeplog_core` linkage.
//! - Submit `DATE SLEEP WAKE` triples through the same gate as the app.
//!
//! # Invariants
//! - Output is deterministic apart from entry IDs, which are not printed.
//! - Entries live only for this process run.

use std::io::Write;
use std::process::ExitCode;

use log::info;
use sleeplog_core::{default_log_level, init_logging, EntryDraft, SleepLog};

const LOG_DIR_ENV: &str = "SLEEPLOG_LOG_DIR";
const LOG_LEVEL_ENV: &str = "SLEEPLOG_LOG_LEVEL";
const FIELDS_PER_ENTRY: usize = 3;

const EXIT_OK: u8 = 0;
const EXIT_REJECTED: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    if let Some((level, log_dir)) = log_config(
        std::env::var(LOG_DIR_ENV).ok(),
        std::env::var(LOG_LEVEL_ENV).ok(),
    ) {
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match run(&args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: failed to write output: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Resolves `(level, log_dir)` from the environment values.
///
/// Returns `None` when no log directory is configured; the level falls back
/// to the build-mode default.
fn log_config(log_dir: Option<String>, level: Option<String>) -> Option<(String, String)> {
    let log_dir = log_dir?;
    let level = level.unwrap_or_else(|| default_log_level().to_string());
    Some((level, log_dir))
}

/// Runs one CLI invocation and returns the process exit code.
fn run(args: &[String], out: &mut impl Write, err: &mut impl Write) -> std::io::Result<u8> {
    if args.is_empty() {
        writeln!(out, "sleeplog_core ping={}", sleeplog_core::ping())?;
        writeln!(out, "sleeplog_core version={}", sleeplog_core::core_version())?;
        return Ok(EXIT_OK);
    }

    if args.len() % FIELDS_PER_ENTRY != 0 {
        writeln!(err, "usage: sleeplog_cli [DATE SLEEP_TIME WAKE_TIME]...")?;
        writeln!(err, "example: sleeplog_cli 2024-12-21 23:30 07:15")?;
        return Ok(EXIT_USAGE);
    }

    let mut log = SleepLog::new();
    let mut rejected = 0usize;
    for chunk in args.chunks(FIELDS_PER_ENTRY) {
        let mut draft = EntryDraft::new(chunk[0].as_str(), chunk[1].as_str(), chunk[2].as_str());
        if let Err(reason) = draft.submit_into(&mut log) {
            writeln!(err, "error: {reason}")?;
            rejected += 1;
        }
    }

    for (index, entry) in log.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        for line in entry.row_lines() {
            writeln!(out, "{line}")?;
        }
    }

    info!(
        "event=cli_run module=cli status=ok accepted={} rejected={}",
        log.len(),
        rejected
    );
    Ok(if rejected > 0 { EXIT_REJECTED } else { EXIT_OK })
}
