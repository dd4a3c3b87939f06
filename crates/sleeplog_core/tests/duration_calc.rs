use sleeplog_core::{calculate_duration, EntryField, SleepDuration, TimeOfDay, ValidationError};

fn time(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::parse(&format!("{hour}:{minute}")).expect("generated time should be valid")
}

#[test]
fn overnight_session_wraps_past_midnight() {
    assert_eq!(calculate_duration("23:30", "07:15").unwrap(), "7h 45m");
}

#[test]
fn equal_times_yield_zero() {
    assert_eq!(calculate_duration("08:00", "08:00").unwrap(), "0h 0m");
}

#[test]
fn same_day_pairs_use_plain_difference() {
    for sleep_hour in (0..24).step_by(5) {
        for wake_hour in sleep_hour..24 {
            for (sleep_minute, wake_minute) in [(0, 0), (15, 45), (59, 59), (30, 30)] {
                let sleep = time(sleep_hour, sleep_minute);
                let wake = time(wake_hour, wake_minute);
                if wake < sleep {
                    continue;
                }
                let expected = wake.minutes_since_midnight() - sleep.minutes_since_midnight();
                let duration = SleepDuration::between(sleep, wake);
                assert_eq!(duration.total_minutes(), expected);
                assert_eq!(
                    duration.to_string(),
                    format!("{}h {}m", expected / 60, expected % 60)
                );
            }
        }
    }
}

#[test]
fn overnight_pairs_add_a_full_day() {
    for sleep_hour in 1..24 {
        for wake_hour in 0..sleep_hour {
            let sleep = time(sleep_hour, 20);
            let wake = time(wake_hour, 10);
            let expected =
                wake.minutes_since_midnight() + 1440 - sleep.minutes_since_midnight();
            let duration = SleepDuration::between(sleep, wake);
            assert_eq!(duration.total_minutes(), expected);
            assert!(duration.total_minutes() < 1440);
        }
    }
}

#[test]
fn rejects_malformed_times_with_field() {
    assert_eq!(
        calculate_duration("24:00", "07:00").unwrap_err(),
        ValidationError::InvalidTimeFormat(EntryField::SleepTime)
    );
    assert_eq!(
        calculate_duration("22:00", "7h").unwrap_err(),
        ValidationError::InvalidTimeFormat(EntryField::WakeTime)
    );
}
