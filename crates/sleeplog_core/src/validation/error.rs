//! Submission gate error taxonomy.

use crate::model::entry::EntryField;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a submission was rejected.
///
/// `Display` renders the user-facing alert text; `code()` is the stable
/// identifier for shells that map errors themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the inputs is empty. Carries the first empty field.
    MissingField(EntryField),
    /// Date present but not shaped `YYYY-MM-DD`.
    InvalidDateFormat,
    /// A time present but not shaped `HH:MM`. Carries the first bad field.
    InvalidTimeFormat(EntryField),
}

impl ValidationError {
    /// Stable snake_case code used across the FFI boundary and in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::InvalidDateFormat => "invalid_date_format",
            Self::InvalidTimeFormat(_) => "invalid_time_format",
        }
    }

    /// Field the shell should focus after showing the message.
    pub fn field(&self) -> EntryField {
        match self {
            Self::MissingField(field) | Self::InvalidTimeFormat(field) => *field,
            Self::InvalidDateFormat => EntryField::Date,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(_) => write!(f, "Please fill all fields"),
            Self::InvalidDateFormat => write!(f, "Invalid date format. Use YYYY-MM-DD."),
            Self::InvalidTimeFormat(_) => write!(f, "Invalid time format. Use HH:MM."),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;
    use crate::model::entry::EntryField;

    #[test]
    fn display_matches_user_facing_messages() {
        assert_eq!(
            ValidationError::MissingField(EntryField::WakeTime).to_string(),
            "Please fill all fields"
        );
        assert_eq!(
            ValidationError::InvalidDateFormat.to_string(),
            "Invalid date format. Use YYYY-MM-DD."
        );
        assert_eq!(
            ValidationError::InvalidTimeFormat(EntryField::SleepTime).to_string(),
            "Invalid time format. Use HH:MM."
        );
    }

    #[test]
    fn codes_and_fields_are_stable() {
        let err = ValidationError::InvalidTimeFormat(EntryField::WakeTime);
        assert_eq!(err.code(), "invalid_time_format");
        assert_eq!(err.field(), EntryField::WakeTime);
        assert_eq!(ValidationError::InvalidDateFormat.field(), EntryField::Date);
        assert_eq!(
            ValidationError::MissingField(EntryField::Date).code(),
            "missing_field"
        );
    }
}
