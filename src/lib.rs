//! Business day arithmetic over the U.S. federal holiday calendar.
//!
//! The crate answers one question: given a start date, which calendar date is
//! the N-th U.S. business day, counting the start date itself as day 1? A
//! business day is any day that is neither a Saturday, a Sunday, nor an
//! observed federal holiday.
//!
//! ```rust
//! use busdays::calendars::{compute_business_day, ndt};
//!
//! // 30 business days from Monday 1st July 2024, skipping Independence Day.
//! let result = compute_business_day(&ndt(2024, 7, 1), 30).unwrap();
//! assert_eq!(result, ndt(2024, 8, 12));
//! ```

pub mod calendars;
pub mod error;
pub mod json;
