//! Ordered field checks shared by submission and import paths.

use crate::model::duration::TimeOfDay;
use crate::model::entry::EntryField;
use crate::validation::error::ValidationError;
use crate::validation::format::is_valid_date_format;

/// Runs the validation gate over three raw inputs.
///
/// Returns the parsed sleep and wake times when every check passes.
///
/// # Errors
/// - `MissingField` for the first empty input (date, sleep, wake).
/// - `InvalidDateFormat` when the date fails the shape check.
/// - `InvalidTimeFormat` for the first time failing the shape check.
pub fn validate_inputs(
    date: &str,
    sleep_time: &str,
    wake_time: &str,
) -> Result<(TimeOfDay, TimeOfDay), ValidationError> {
    for (field, value) in [
        (EntryField::Date, date),
        (EntryField::SleepTime, sleep_time),
        (EntryField::WakeTime, wake_time),
    ] {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    if !is_valid_date_format(date) {
        return Err(ValidationError::InvalidDateFormat);
    }

    let sleep = TimeOfDay::parse(sleep_time)
        .ok_or(ValidationError::InvalidTimeFormat(EntryField::SleepTime))?;
    let wake = TimeOfDay::parse(wake_time)
        .ok_or(ValidationError::InvalidTimeFormat(EntryField::WakeTime))?;
    Ok((sleep, wake))
}

#[cfg(test)]
mod tests {
    use super::validate_inputs;
    use crate::model::entry::EntryField;
    use crate::validation::error::ValidationError;

    #[test]
    fn reports_first_empty_field() {
        assert_eq!(
            validate_inputs("", "", "").unwrap_err(),
            ValidationError::MissingField(EntryField::Date)
        );
        assert_eq!(
            validate_inputs("2024-12-21", "", "07:00").unwrap_err(),
            ValidationError::MissingField(EntryField::SleepTime)
        );
        assert_eq!(
            validate_inputs("2024-12-21", "22:00", "").unwrap_err(),
            ValidationError::MissingField(EntryField::WakeTime)
        );
    }

    #[test]
    fn missing_wins_over_format_errors() {
        let err = validate_inputs("bad", "99:99", "").unwrap_err();
        assert_eq!(err, ValidationError::MissingField(EntryField::WakeTime));
    }

    #[test]
    fn date_error_wins_over_time_error() {
        let err = validate_inputs("2024/12/21", "99:99", "07:00").unwrap_err();
        assert_eq!(err, ValidationError::InvalidDateFormat);
    }

    #[test]
    fn sleep_time_is_checked_before_wake_time() {
        assert_eq!(
            validate_inputs("2024-12-21", "25:00", "24:00").unwrap_err(),
            ValidationError::InvalidTimeFormat(EntryField::SleepTime)
        );
        assert_eq!(
            validate_inputs("2024-12-21", "22:00", "24:00").unwrap_err(),
            ValidationError::InvalidTimeFormat(EntryField::WakeTime)
        );
    }

    #[test]
    fn whitespace_is_not_treated_as_missing() {
        let err = validate_inputs(" ", "22:00", "07:00").unwrap_err();
        assert_eq!(err, ValidationError::InvalidDateFormat);
    }

    #[test]
    fn returns_parsed_times_on_success() {
        let (sleep, wake) = validate_inputs("2024-12-21", "22:30", "6:5").expect("valid input");
        assert_eq!((sleep.hour(), sleep.minute()), (22, 30));
        assert_eq!((wake.hour(), wake.minute()), (6, 5));
    }
}
