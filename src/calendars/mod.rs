//! Business day calendars and U.S. federal holiday date manipulation.
//!
//! A [`Cal`] pairs a holiday set with a weekend mask, and the [`DateRoll`]
//! trait provides the date classification and rolling operations on top of
//! it. The [`federal_cal`] constructor builds the observed U.S. federal
//! holiday calendar for a span of years from the statutory rules, and
//! [`compute_business_day`] performs the day-1-inclusive business day count.
//!
//! ### Example
//! ```rust
//! use busdays::calendars::{federal_cal, ndt, DateRoll};
//! let cal = federal_cal(2024, 2024);
//! assert!(!cal.is_bus_day(&ndt(2024, 7, 4)));  // Independence Day
//! assert_eq!(ndt(2024, 7, 5), cal.roll_forward_bus_day(&ndt(2024, 7, 4)));
//! ```

mod cal;
mod calendar;
mod dateroll;
mod federal;
mod serde;

pub use crate::calendars::{
    cal::Cal,
    calendar::{fmt_mdy, ndt, parse_mdy},
    dateroll::DateRoll,
    federal::{
        business_dates, compute_business_day, federal_cal, federal_holidays,
        is_federal_holiday, last_weekday_of_month, nth_weekday_of_month, observed,
    },
};
