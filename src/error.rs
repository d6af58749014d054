//! Calendar and business day errors.

use thiserror::Error;

/// Errors raised by calendar date arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The input date or day count cannot be used for a business day calculation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
