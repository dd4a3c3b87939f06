//! Flutter-facing bindings for SleepLog core.

pub mod api;
