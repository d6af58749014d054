//! Observed U.S. federal holiday rules and business day computation.
//!
//! Holiday dates are generated from the statutory rules rather than a static
//! table, so any year can be queried. Fixed-date holidays falling on a
//! weekend are shifted to their observed dates: Saturday observes on the
//! preceding Friday and Sunday on the following Monday. Floating holidays
//! (n-th or last weekday of a month) always land on a weekday and are never
//! shifted.

use chrono::prelude::*;
use chrono::Days;
use tracing::debug;

use crate::calendars::{ndt, Cal, DateRoll};
use crate::error::CalendarError;

/// Return the date of the n-th given weekday in a month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> NaiveDateTime {
    let mut date = ndt(year, month, 1);
    while date.weekday() != weekday {
        date = date + Days::new(1);
    }
    date + Days::new(7 * (n as u64 - 1))
}

/// Return the date of the last given weekday in a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> NaiveDateTime {
    let next_month = if month == 12 {
        ndt(year + 1, 1, 1)
    } else {
        ndt(year, month + 1, 1)
    };
    let mut date = next_month - Days::new(1);
    while date.weekday() != weekday {
        date = date - Days::new(1);
    }
    date
}

/// Shift a fixed-date holiday onto the date it is observed.
///
/// Saturday observes on the preceding Friday, Sunday on the following Monday,
/// any other day observes on the nominal date itself.
pub fn observed(date: NaiveDateTime) -> NaiveDateTime {
    match date.weekday() {
        Weekday::Sat => date - Days::new(1),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

/// Return the observed U.S. federal holidays nominally belonging to `year`.
///
/// The result always has 11 entries, ordered by nominal date. A New Year's
/// Day falling on a Saturday is observed on the preceding 31st December, so
/// the first entry may precede 1st January of `year`; callers classifying a
/// December date must also consult the following year's set.
pub fn federal_holidays(year: i32) -> Vec<NaiveDateTime> {
    vec![
        observed(ndt(year, 1, 1)),                       // New Year's Day
        nth_weekday_of_month(year, 1, Weekday::Mon, 3),  // Martin Luther King Jr. Day
        nth_weekday_of_month(year, 2, Weekday::Mon, 3),  // Washington's Birthday
        last_weekday_of_month(year, 5, Weekday::Mon),    // Memorial Day
        observed(ndt(year, 6, 19)),                      // Juneteenth
        observed(ndt(year, 7, 4)),                       // Independence Day
        nth_weekday_of_month(year, 9, Weekday::Mon, 1),  // Labor Day
        nth_weekday_of_month(year, 10, Weekday::Mon, 2), // Columbus Day
        observed(ndt(year, 11, 11)),                     // Veterans Day
        nth_weekday_of_month(year, 11, Weekday::Thu, 4), // Thanksgiving Day
        observed(ndt(year, 12, 25)),                     // Christmas Day
    ]
}

/// Build a [`Cal`] of observed federal holidays covering an inclusive range
/// of nominal years, with a Saturday/Sunday weekend mask.
pub fn federal_cal(first_year: i32, last_year: i32) -> Cal {
    let holidays: Vec<NaiveDateTime> =
        (first_year..=last_year).flat_map(federal_holidays).collect();
    Cal::new(holidays, vec![5, 6])
}

/// Returns whether `date` is an observed federal holiday.
///
/// The nominal-year sets of both adjacent years are consulted as well, so a
/// holiday observed across a year boundary is not missed.
pub fn is_federal_holiday(date: &NaiveDateTime) -> bool {
    let year = date.year();
    (year - 1..=year + 1).any(|y| federal_holidays(y).contains(date))
}

/// Return the date falling `count` U.S. business days from `start`, where
/// `start` itself counts as day 1 when it is a business day.
///
/// Skips Saturdays, Sundays and observed federal holidays. Fails with
/// [`CalendarError::InvalidInput`] when `count` is not a positive integer.
pub fn compute_business_day(
    start: &NaiveDateTime,
    count: i32,
) -> Result<NaiveDateTime, CalendarError> {
    let cal = walk_cal(start, count)?;
    cal.elapse_bus_days(start, count)
}

/// Return the ordered business dates of the walk: `count` elements, beginning
/// at the first business day on or after `start` and ending at the
/// [`compute_business_day`] result.
pub fn business_dates(
    start: &NaiveDateTime,
    count: i32,
) -> Result<Vec<NaiveDateTime>, CalendarError> {
    let cal = walk_cal(start, count)?;
    let first = cal.roll_forward_bus_day(start);
    let last = cal.add_bus_days(&first, count - 1)?;
    cal.bus_date_range(&first, &last)
}

/// Federal calendar spanning every year the walk can touch, plus both
/// adjacent years to catch holidays observed across a year boundary.
fn walk_cal(start: &NaiveDateTime, count: i32) -> Result<Cal, CalendarError> {
    if count < 1 {
        return Err(CalendarError::InvalidInput(format!(
            "`count` must be a positive integer, got {}",
            count
        )));
    }
    // the walk covers at most ~7/5 * count calendar days plus a holiday margin
    let horizon = start
        .checked_add_days(Days::new(count as u64 * 2 + 14))
        .ok_or_else(|| {
            CalendarError::InvalidInput(format!(
                "`count` {} exceeds the supported calendar range",
                count
            ))
        })?;
    debug!(
        first_year = start.year() - 1,
        last_year = horizon.year() + 1,
        "building federal calendar"
    );
    Ok(federal_cal(start.year() - 1, horizon.year() + 1))
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_weekday_of_month() {
        // 3rd Monday of January 2025
        assert_eq!(ndt(2025, 1, 20), nth_weekday_of_month(2025, 1, Weekday::Mon, 3));
        // 4th Thursday of November 2024
        assert_eq!(ndt(2024, 11, 28), nth_weekday_of_month(2024, 11, Weekday::Thu, 4));
        // 1st Monday of September 2025
        assert_eq!(ndt(2025, 9, 1), nth_weekday_of_month(2025, 9, Weekday::Mon, 1));
    }

    #[test]
    fn test_last_weekday_of_month() {
        assert_eq!(ndt(2025, 5, 26), last_weekday_of_month(2025, 5, Weekday::Mon));
        assert_eq!(ndt(2024, 5, 27), last_weekday_of_month(2024, 5, Weekday::Mon));
        // December exercises the year rollover in the month arithmetic
        assert_eq!(ndt(2025, 12, 29), last_weekday_of_month(2025, 12, Weekday::Mon));
    }

    #[test]
    fn test_observed() {
        // Saturday shifts to the preceding Friday
        assert_eq!(ndt(2021, 12, 24), observed(ndt(2021, 12, 25)));
        // Sunday shifts to the following Monday
        assert_eq!(ndt(2023, 1, 2), observed(ndt(2023, 1, 1)));
        // weekdays are unchanged
        assert_eq!(ndt(2024, 7, 4), observed(ndt(2024, 7, 4)));
    }

    #[test]
    fn test_federal_holidays_2025() {
        let result = federal_holidays(2025);
        assert_eq!(
            result,
            vec![
                ndt(2025, 1, 1),   // New Year's Day (Wednesday)
                ndt(2025, 1, 20),  // MLK Day
                ndt(2025, 2, 17),  // Washington's Birthday
                ndt(2025, 5, 26),  // Memorial Day
                ndt(2025, 6, 19),  // Juneteenth (Thursday)
                ndt(2025, 7, 4),   // Independence Day (Friday)
                ndt(2025, 9, 1),   // Labor Day
                ndt(2025, 10, 13), // Columbus Day
                ndt(2025, 11, 11), // Veterans Day (Tuesday)
                ndt(2025, 11, 27), // Thanksgiving Day
                ndt(2025, 12, 25), // Christmas Day (Thursday)
            ]
        );
    }

    #[test]
    fn test_federal_holidays_count() {
        for year in 2015..2040 {
            assert_eq!(federal_holidays(year).len(), 11, "year {}", year);
        }
    }

    #[test]
    fn test_weekend_observance_shifts() {
        // New Year's Day 2022 fell on a Saturday, observed Friday 2021-12-31
        assert_eq!(federal_holidays(2022)[0], ndt(2021, 12, 31));
        // New Year's Day 2023 fell on a Sunday, observed Monday 2023-01-02
        assert_eq!(federal_holidays(2023)[0], ndt(2023, 1, 2));
        // Independence Day 2026 falls on a Saturday, observed Friday 2026-07-03
        assert_eq!(federal_holidays(2026)[5], ndt(2026, 7, 3));
        // Veterans Day 2023 fell on a Saturday, observed Friday 2023-11-10
        assert_eq!(federal_holidays(2023)[8], ndt(2023, 11, 10));
        // Christmas 2021 fell on a Saturday, observed Friday 2021-12-24
        assert_eq!(federal_holidays(2021)[10], ndt(2021, 12, 24));
    }

    #[test]
    fn test_is_federal_holiday_cross_year() {
        // the observed New Year's Day of 2022 belongs to the 2022 nominal set
        // but falls in December 2021
        assert!(is_federal_holiday(&ndt(2021, 12, 31)));
        assert!(is_federal_holiday(&ndt(2022, 6, 20))); // Juneteenth 2022 observed (Sunday shift)
        assert!(!is_federal_holiday(&ndt(2022, 1, 1))); // nominal date is not the observed date
        assert!(!is_federal_holiday(&ndt(2024, 7, 5)));
    }

    #[test]
    fn test_federal_cal_spans_years() {
        let cal = federal_cal(2021, 2022);
        assert!(cal.is_holiday(&ndt(2021, 12, 24))); // observed Christmas 2021
        assert!(cal.is_holiday(&ndt(2021, 12, 31))); // observed New Year's 2022
        assert!(!cal.is_bus_day(&ndt(2022, 6, 20))); // observed Juneteenth 2022
        assert!(cal.is_bus_day(&ndt(2022, 6, 21)));
    }

    #[test]
    fn test_compute_business_day_30_from_july() {
        // Monday 2024-07-01 counts as day 1; Independence Day (Thursday, not
        // shifted) and weekends are skipped
        let result = compute_business_day(&ndt(2024, 7, 1), 30).unwrap();
        assert_eq!(result, ndt(2024, 8, 12));
    }

    #[test]
    fn test_compute_business_day_holiday_start() {
        // Christmas 2025 is a Thursday holiday; day 1 is Friday 26th
        let result = compute_business_day(&ndt(2025, 12, 25), 1).unwrap();
        assert_eq!(result, ndt(2025, 12, 26));
    }

    #[test]
    fn test_compute_business_day_over_year_boundary() {
        // Monday 2021-12-27 to Thursday 30th are days 1-4; Friday 31st is the
        // observed New Year's Day of 2022 and day 5 lands on Monday 2022-01-03
        let result = compute_business_day(&ndt(2021, 12, 27), 5).unwrap();
        assert_eq!(result, ndt(2022, 1, 3));
    }

    #[test]
    fn test_compute_business_day_invalid_count() {
        for count in [0, -1, -30] {
            match compute_business_day(&ndt(2024, 7, 1), count) {
                Ok(_) => panic!("expected error for count {}", count),
                Err(CalendarError::InvalidInput(_)) => {}
            }
        }
    }

    #[test]
    fn test_compute_business_day_count_beyond_calendar_range() {
        // a horizon past chrono's maximum date must error, not panic
        for count in [2_000_000_000, i32::MAX] {
            match compute_business_day(&ndt(2024, 1, 1), count) {
                Ok(_) => panic!("expected error for count {}", count),
                Err(CalendarError::InvalidInput(_)) => {}
            }
        }
    }

    #[test]
    fn test_business_dates() {
        let result = business_dates(&ndt(2024, 7, 1), 5).unwrap();
        assert_eq!(
            result,
            vec![
                ndt(2024, 7, 1),
                ndt(2024, 7, 2),
                ndt(2024, 7, 3),
                ndt(2024, 7, 5), // the 4th is Independence Day
                ndt(2024, 7, 8), // over the weekend
            ]
        );
    }

    #[test]
    fn test_business_dates_ends_at_computed_day() {
        let start = ndt(2025, 11, 20);
        let dates = business_dates(&start, 30).unwrap();
        assert_eq!(dates.len(), 30);
        assert_eq!(*dates.last().unwrap(), compute_business_day(&start, 30).unwrap());
    }
}
