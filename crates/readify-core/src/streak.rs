//! Daily visit streak
//!
//! A streak counts consecutive calendar days on which the app was opened.
//! It is advanced at most once per day.

use chrono::NaiveDate;

use crate::models::StreakRecord;

/// Advance a streak for a visit on `today`
///
/// - same day as `last`: unchanged
/// - the day after `last`: count + 1
/// - a longer gap, or no previous visit: restarts at 1
/// - `today` earlier than `last` (clock skew, timezone change): unchanged
pub fn compute_streak(today: NaiveDate, last: Option<NaiveDate>, count: u32) -> StreakRecord {
    let Some(last) = last else {
        return StreakRecord {
            last: today,
            count: 1,
        };
    };

    let gap = (today - last).num_days();
    match gap {
        1 => StreakRecord {
            last: today,
            count: count.saturating_add(1),
        },
        g if g > 1 => StreakRecord {
            last: today,
            count: 1,
        },
        _ => StreakRecord { last, count },
    }
}

/// Advance an optional saved streak for a visit on `today`
pub fn advance(today: NaiveDate, saved: Option<StreakRecord>) -> StreakRecord {
    match saved {
        Some(record) => compute_streak(today, Some(record.last), record.count),
        None => compute_streak(today, None, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_first_visit_starts_at_one() {
        let record = compute_streak(day(1), None, 0);
        assert_eq!(record, StreakRecord { last: day(1), count: 1 });
    }

    #[test]
    fn test_same_day_is_noop() {
        let first = compute_streak(day(1), None, 0);
        let again = compute_streak(day(1), Some(first.last), first.count);
        assert_eq!(again, first);
    }

    #[test]
    fn test_consecutive_day_increments() {
        let record = compute_streak(day(2), Some(day(1)), 1);
        assert_eq!(record, StreakRecord { last: day(2), count: 2 });

        let record = compute_streak(day(3), Some(record.last), record.count);
        assert_eq!(record.count, 3);
    }

    #[test]
    fn test_gap_resets() {
        let record = compute_streak(day(5), Some(day(2)), 4);
        assert_eq!(record, StreakRecord { last: day(5), count: 1 });
    }

    #[test]
    fn test_month_boundary_is_consecutive() {
        let last = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
        let record = compute_streak(day(1), Some(last), 6);
        assert_eq!(record.count, 7);
    }

    #[test]
    fn test_backwards_clock_is_noop() {
        let record = compute_streak(day(3), Some(day(5)), 4);
        assert_eq!(record, StreakRecord { last: day(5), count: 4 });
    }

    #[test]
    fn test_advance_saved() {
        assert_eq!(advance(day(1), None).count, 1);

        let saved = StreakRecord { last: day(1), count: 1 };
        assert_eq!(advance(day(2), Some(saved)).count, 2);
        assert_eq!(advance(day(1), Some(saved)), saved);
    }
}
