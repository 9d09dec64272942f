use chrono::{DateTime, FixedOffset, Utc};

/// Event start with an explicit UTC+5:30 offset, so every visitor counts down
/// to the same instant regardless of their local timezone.
pub const EVENT_START: &str = "2027-04-11T09:00:00+05:30";

pub fn event_start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(EVENT_START).expect("event start timestamp is valid RFC 3339")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownState {
    /// All-zeros is the terminal display state once the event has started.
    pub fn is_finished(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// True once `target` has passed. Terminality is decided on the raw
/// remainder: a sub-second remainder displays as all zeros but the countdown
/// is not over until this flips.
pub fn is_elapsed(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> bool {
    target.signed_duration_since(now).num_milliseconds() <= 0
}

/// Time left until `target`, clamped to zero once the target has passed.
pub fn time_remaining(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> CountdownState {
    let remaining_ms = target.signed_duration_since(now).num_milliseconds();
    if remaining_ms <= 0 {
        return CountdownState::default();
    }
    let remaining_ms = remaining_ms as u64;
    CountdownState {
        days: remaining_ms / 86_400_000,
        hours: remaining_ms % 86_400_000 / 3_600_000,
        minutes: remaining_ms % 3_600_000 / 60_000,
        seconds: remaining_ms % 60_000 / 1_000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn target() -> DateTime<FixedOffset> {
        event_start()
    }

    #[test]
    fn event_start_parses_with_explicit_offset() {
        assert_eq!(target().offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn splits_remaining_time_into_units() {
        // 2 days, 3 hours, 4 minutes, 5 seconds before the event.
        let now = (target() - Duration::milliseconds(2 * 86_400_000 + 3 * 3_600_000 + 4 * 60_000 + 5_000))
            .with_timezone(&Utc);
        let state = time_remaining(target(), now);
        assert_eq!(
            state,
            CountdownState {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn fields_stay_within_unit_ranges() {
        for offset_ms in [1_i64, 999, 59_999, 3_599_999, 86_399_999, 123_456_789] {
            let now = (target() - Duration::milliseconds(offset_ms)).with_timezone(&Utc);
            let state = time_remaining(target(), now);
            assert!(state.seconds < 60);
            assert!(state.minutes < 60);
            assert!(state.hours < 24);
        }
    }

    #[test]
    fn reconstruction_matches_within_one_second() {
        for offset_ms in [1_500_i64, 61_001, 3_600_001, 90_061_000, 777_777_777] {
            let now = (target() - Duration::milliseconds(offset_ms)).with_timezone(&Utc);
            let state = time_remaining(target(), now);
            let rebuilt_ms = ((state.days * 86_400 + state.hours * 3_600 + state.minutes * 60
                + state.seconds)
                * 1_000) as i64;
            assert!(rebuilt_ms <= offset_ms);
            assert!(offset_ms - rebuilt_ms < 1_000);
        }
    }

    #[test]
    fn past_target_clamps_to_zero() {
        let now = (target() + Duration::seconds(1)).with_timezone(&Utc);
        let state = time_remaining(target(), now);
        assert_eq!(state, CountdownState::default());
        assert!(state.is_finished());
        assert!(is_elapsed(target(), now));
    }

    #[test]
    fn sub_second_remainder_displays_zero_but_is_not_elapsed() {
        let now = (target() - Duration::milliseconds(500)).with_timezone(&Utc);
        assert!(time_remaining(target(), now).is_finished());
        assert!(!is_elapsed(target(), now));
    }

    #[test]
    fn terminal_state_is_idempotent_across_ticks() {
        for tick in 0..5 {
            let now = (target() + Duration::seconds(tick)).with_timezone(&Utc);
            assert!(time_remaining(target(), now).is_finished());
        }
    }

    #[test]
    fn exact_target_instant_is_terminal() {
        let now = target().with_timezone(&Utc);
        assert!(time_remaining(target(), now).is_finished());
    }
}
