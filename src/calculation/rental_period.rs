//! Rental period derivation.
//!
//! This module turns the pickup and dropoff timestamps into the quantities
//! the price depends on: the number of rental days, how many of them fall
//! on a weekend, and the pricing season. All calendar arithmetic is in UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::SeasonRules;
use crate::error::{EngineError, EngineResult};
use crate::models::Season;

/// Milliseconds in one rental day.
pub const MILLISECONDS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// The calendar facts of a rental derived from its two timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPeriod {
    /// Pickup instant.
    pub pickup: DateTime<Utc>,
    /// Dropoff instant.
    pub dropoff: DateTime<Utc>,
    /// Number of rental days, counting both ends. Always at least 1.
    pub days: u64,
    /// Saturdays and Sundays among the rental days.
    pub weekend_days: u64,
    /// The pricing season.
    pub season: Season,
}

impl RentalPeriod {
    /// Derives the rental period from epoch-millisecond timestamps.
    ///
    /// Returns `InvalidTimestamp` if either timestamp cannot be represented
    /// as a calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_pricing::calculation::RentalPeriod;
    /// use rental_pricing::config::SeasonRules;
    /// use rental_pricing::models::Season;
    ///
    /// // 2024-01-04 (Thursday) to 2024-01-06 (Saturday)
    /// let period = RentalPeriod::from_timestamps(
    ///     1_704_326_400_000,
    ///     1_704_499_200_000,
    ///     &SeasonRules::default(),
    /// )?;
    /// assert_eq!(period.days, 3);
    /// assert_eq!(period.weekend_days, 1);
    /// assert_eq!(period.season, Season::Low);
    /// # Ok::<(), rental_pricing::error::EngineError>(())
    /// ```
    pub fn from_timestamps(
        pickup_ms: i64,
        dropoff_ms: i64,
        rules: &SeasonRules,
    ) -> EngineResult<Self> {
        let pickup = to_datetime("pickup_timestamp", pickup_ms)?;
        let dropoff = to_datetime("dropoff_timestamp", dropoff_ms)?;

        let days = rental_days(pickup_ms, dropoff_ms);
        let first_day = pickup.date_naive().min(dropoff.date_naive());

        Ok(Self {
            pickup,
            dropoff,
            days,
            weekend_days: weekend_days(first_day, days),
            season: season(pickup, dropoff, rules),
        })
    }

    /// Rental days falling Monday through Friday.
    pub fn weekdays(&self) -> u64 {
        self.days - self.weekend_days
    }

    /// Returns true if the dropoff precedes the pickup.
    pub fn is_reversed(&self) -> bool {
        self.dropoff < self.pickup
    }
}

fn to_datetime(field: &str, millis: i64) -> EngineResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| EngineError::InvalidTimestamp {
        field: field.to_string(),
        value: millis,
    })
}

/// Counts rental days between two timestamps, inclusive of both ends.
///
/// The absolute distance is rounded to the nearest whole day (halves round
/// up) and one is added, so the order of the arguments does not matter and
/// a same-instant rental lasts one day.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::rental_days;
///
/// let day = 86_400_000;
/// assert_eq!(rental_days(0, 0), 1);
/// assert_eq!(rental_days(0, 2 * day), 3);
/// assert_eq!(rental_days(2 * day, 0), 3);
/// assert_eq!(rental_days(0, day / 2), 2);
/// ```
pub fn rental_days(pickup_ms: i64, dropoff_ms: i64) -> u64 {
    let distance = pickup_ms.abs_diff(dropoff_ms);
    let whole_days = distance / MILLISECONDS_PER_DAY;
    let round_up = distance % MILLISECONDS_PER_DAY >= MILLISECONDS_PER_DAY / 2;

    whole_days + u64::from(round_up) + 1
}

/// Classifies a rental into high or low season by month.
///
/// The rental is high season if the pickup month or the dropoff month lies
/// in the high-season window, or if the pickup month is before the window
/// and the dropoff month after it. Years are ignored, and the rule reads
/// pickup and dropoff literally: a reversed pair may classify differently.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rental_pricing::calculation::season;
/// use rental_pricing::config::SeasonRules;
/// use rental_pricing::models::Season;
///
/// let rules = SeasonRules::default();
/// let february = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
/// let november = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
///
/// assert_eq!(season(february, november, &rules), Season::High);
/// assert_eq!(season(november, february, &rules), Season::Low);
/// ```
pub fn season(pickup: DateTime<Utc>, dropoff: DateTime<Utc>, rules: &SeasonRules) -> Season {
    let start = rules.high_season_start_month;
    let end = rules.high_season_end_month;
    let in_window = |month: u32| (start..=end).contains(&month);

    let pickup_month = pickup.month();
    let dropoff_month = dropoff.month();

    if in_window(pickup_month)
        || in_window(dropoff_month)
        || (pickup_month < start && dropoff_month > end)
    {
        Season::High
    } else {
        Season::Low
    }
}

/// Counts Saturdays and Sundays among `days` consecutive dates starting at `first_day`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rental_pricing::calculation::weekend_days;
///
/// // 2025-03-01 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// assert_eq!(weekend_days(saturday, 3), 2);
/// assert_eq!(weekend_days(saturday, 14), 4);
/// ```
pub fn weekend_days(first_day: NaiveDate, days: u64) -> u64 {
    let mut count = (days / 7) * 2;
    let mut weekday = first_day.weekday();

    for _ in 0..days % 7 {
        if matches!(weekday, Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        weekday = weekday.succ();
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const DAY: i64 = MILLISECONDS_PER_DAY as i64;

    fn ms(year: i32, month: u32, day: u32) -> i64 {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // ==================== rental_days ====================

    #[test]
    fn test_same_instant_is_one_day() {
        assert_eq!(rental_days(ms(2024, 2, 5), ms(2024, 2, 5)), 1);
    }

    #[test]
    fn test_three_calendar_days() {
        assert_eq!(rental_days(ms(2024, 1, 1), ms(2024, 1, 3)), 3);
    }

    #[test]
    fn test_reversed_pair_gives_same_count() {
        assert_eq!(
            rental_days(ms(2024, 2, 15), ms(2024, 2, 5)),
            rental_days(ms(2024, 2, 5), ms(2024, 2, 15))
        );
        assert_eq!(rental_days(ms(2024, 2, 15), ms(2024, 2, 5)), 11);
    }

    #[test]
    fn test_partial_days_round_to_nearest() {
        let start = ms(2024, 1, 1);
        assert_eq!(rental_days(start, start + DAY / 2 - 1), 1);
        assert_eq!(rental_days(start, start + DAY / 2), 2);
        assert_eq!(rental_days(start, start + DAY + DAY / 3), 2);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        assert!(rental_days(i64::MIN, i64::MAX) > 1);
    }

    // ==================== season ====================

    #[test]
    fn test_winter_rental_is_low_season() {
        let rules = SeasonRules::default();
        assert_eq!(season(at(2024, 1, 1), at(2024, 1, 3), &rules), Season::Low);
        assert_eq!(season(at(2024, 11, 1), at(2024, 12, 20), &rules), Season::Low);
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let rules = SeasonRules::default();
        assert_eq!(season(at(2024, 4, 1), at(2024, 4, 1), &rules), Season::High);
        assert_eq!(season(at(2024, 10, 31), at(2024, 10, 31), &rules), Season::High);
        assert_eq!(season(at(2024, 3, 31), at(2024, 3, 31), &rules), Season::Low);
        assert_eq!(season(at(2024, 11, 1), at(2024, 11, 1), &rules), Season::Low);
    }

    #[test]
    fn test_either_endpoint_in_window_is_high_season() {
        let rules = SeasonRules::default();
        assert_eq!(season(at(2024, 3, 25), at(2024, 4, 2), &rules), Season::High);
        assert_eq!(season(at(2024, 10, 30), at(2024, 11, 2), &rules), Season::High);
    }

    #[test]
    fn test_span_covering_window_is_high_season() {
        let rules = SeasonRules::default();
        assert_eq!(season(at(2025, 2, 1), at(2025, 11, 1), &rules), Season::High);
    }

    #[test]
    fn test_reversed_span_uses_literal_endpoints() {
        let rules = SeasonRules::default();
        assert_eq!(season(at(2025, 11, 1), at(2025, 2, 1), &rules), Season::Low);
    }

    #[test]
    fn test_year_is_ignored() {
        let rules = SeasonRules::default();
        // December to January of the next year never touches the window
        assert_eq!(season(at(2024, 12, 20), at(2025, 1, 5), &rules), Season::Low);
        // January to December of a later year is treated like a same-year span
        assert_eq!(season(at(2024, 1, 5), at(2026, 12, 20), &rules), Season::High);
    }

    #[test]
    fn test_custom_window() {
        let rules = SeasonRules {
            high_season_start_month: 6,
            high_season_end_month: 8,
        };
        assert_eq!(season(at(2024, 5, 1), at(2024, 5, 30), &rules), Season::Low);
        assert_eq!(season(at(2024, 7, 1), at(2024, 7, 2), &rules), Season::High);
    }

    // ==================== weekend_days ====================

    #[test]
    fn test_weekday_only_span_has_no_weekend_days() {
        // 2024-01-01 is a Monday
        assert_eq!(weekend_days(date(2024, 1, 1), 5), 0);
    }

    #[test]
    fn test_span_ending_on_saturday() {
        // Thursday to Saturday
        assert_eq!(weekend_days(date(2024, 1, 4), 3), 1);
    }

    #[test]
    fn test_full_weeks_count_two_each() {
        assert_eq!(weekend_days(date(2024, 1, 3), 7), 2);
        assert_eq!(weekend_days(date(2024, 1, 3), 21), 6);
    }

    #[test]
    fn test_remainder_wraps_through_sunday() {
        // Saturday plus 8 days: Sat, Sun, Mon..Fri, Sat, Sun
        assert_eq!(weekend_days(date(2025, 2, 1), 9), 4);
    }

    #[test]
    fn test_long_span_matches_day_by_day_count() {
        let first = date(2025, 2, 1);
        let days = 274;
        let expected = (0..days)
            .filter(|offset| {
                let day = first + chrono::Duration::days(*offset as i64);
                matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
            })
            .count() as u64;

        assert_eq!(weekend_days(first, days), expected);
        assert_eq!(expected, 79);
    }

    // ==================== RentalPeriod ====================

    #[test]
    fn test_period_counts_weekends_from_earlier_date() {
        let rules = SeasonRules::default();
        let forward = RentalPeriod::from_timestamps(ms(2024, 2, 5), ms(2024, 2, 15), &rules).unwrap();
        let reversed = RentalPeriod::from_timestamps(ms(2024, 2, 15), ms(2024, 2, 5), &rules).unwrap();

        assert_eq!(forward.days, 11);
        assert_eq!(forward.weekend_days, 2);
        assert_eq!(forward.weekdays(), 9);
        assert_eq!(reversed.days, forward.days);
        assert_eq!(reversed.weekend_days, forward.weekend_days);
        assert!(!forward.is_reversed());
        assert!(reversed.is_reversed());
    }

    #[test]
    fn test_period_rejects_out_of_range_timestamp() {
        let rules = SeasonRules::default();
        let result = RentalPeriod::from_timestamps(i64::MAX, 0, &rules);

        match result {
            Err(EngineError::InvalidTimestamp { field, value }) => {
                assert_eq!(field, "pickup_timestamp");
                assert_eq!(value, i64::MAX);
            }
            other => panic!("Expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_period_rejects_out_of_range_dropoff() {
        let rules = SeasonRules::default();
        let result = RentalPeriod::from_timestamps(0, i64::MIN, &rules);
        assert!(matches!(
            result,
            Err(EngineError::InvalidTimestamp { ref field, .. }) if field == "dropoff_timestamp"
        ));
    }
}
