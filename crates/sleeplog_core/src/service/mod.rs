//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw form input into validated entries.
//! - Keep UI/FFI layers decoupled from validation details.

pub mod draft;
pub mod entry_service;
