//! Regex-backed date/time shape validators.

use once_cell::sync::Lazy;
use regex::Regex;

// `[0-9]` instead of `\d`: the regex crate treats `\d` as any Unicode digit.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5]?[0-9])$").expect("valid time regex")
});

/// Returns whether `value` has the `YYYY-MM-DD` digit shape.
///
/// Month and day ranges are not checked, so `2024-13-99` passes.
pub fn is_valid_date_format(value: &str) -> bool {
    DATE_RE.is_match(value)
}

/// Returns whether `value` is a 24-hour `H:M` / `HH:MM` time of day.
///
/// Hours `0..=23` and minutes `0..=59`, each with one or two digits.
pub fn is_valid_time_format(value: &str) -> bool {
    TIME_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_date_format, is_valid_time_format};

    #[test]
    fn date_accepts_digit_shape_only() {
        assert!(is_valid_date_format("2024-12-21"));
        assert!(is_valid_date_format("2024-13-99"));
        assert!(is_valid_date_format("0000-00-00"));
    }

    #[test]
    fn date_rejects_other_separators_and_lengths() {
        assert!(!is_valid_date_format("2024/12/21"));
        assert!(!is_valid_date_format("24-12-21"));
        assert!(!is_valid_date_format("2024-1-21"));
        assert!(!is_valid_date_format("2024-12-21 "));
        assert!(!is_valid_date_format("2024-12-21\n"));
        assert!(!is_valid_date_format(""));
    }

    #[test]
    fn date_rejects_non_ascii_digits() {
        assert!(!is_valid_date_format("２０２４-12-21"));
        assert!(!is_valid_date_format("٢٠٢٤-12-21"));
    }

    #[test]
    fn time_accepts_hour_and_minute_bounds() {
        for value in ["00:00", "0:0", "9:5", "09:05", "19:59", "23:59", "20:00"] {
            assert!(is_valid_time_format(value), "{value} should be valid");
        }
    }

    #[test]
    fn time_rejects_out_of_range_and_malformed() {
        for value in [
            "24:00", "23:60", "7", "07:", ":30", "007:00", "07:000", "7.30", "", " 7:30",
        ] {
            assert!(!is_valid_time_format(value), "{value} should be invalid");
        }
    }
}
