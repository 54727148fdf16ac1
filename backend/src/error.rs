//! Error types for numerology computations.
//!
//! Every failure here stems from client input: a date string that does not
//! parse, a derived calendar date that does not exist, or a year outside the
//! window the service computes for. Nothing is retried.

/// Result type for numerology operations
pub type NumerologyResult<T> = Result<T, NumerologyError>;

/// Error type for numerology operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumerologyError {
    /// Input is not a `DD-MM-YYYY` date, or a date of birth falls outside
    /// the supported year range.
    #[error("Invalid {field} '{input}': {reason}")]
    InvalidDateFormat {
        field: &'static str,
        input: String,
        reason: String,
    },

    /// A date assembled from derived parts does not exist on the calendar.
    #[error("Invalid calendar date: year={year}, month={month}, day={day}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    /// A year parameter lies outside the window the service computes for.
    #[error("Invalid {field} {year}: must be between {min} and {max}")]
    YearOutOfRange {
        field: &'static str,
        year: i32,
        min: i32,
        max: i32,
    },
}

impl NumerologyError {
    /// Create an invalid date format error.
    pub fn invalid_format(
        field: &'static str,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDateFormat {
            field,
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid calendar date error.
    pub fn invalid_calendar_date(year: i32, month: u32, day: u32) -> Self {
        Self::InvalidCalendarDate { year, month, day }
    }

    /// Create a year out of range error.
    pub fn year_out_of_range(field: &'static str, year: i32, min: i32, max: i32) -> Self {
        Self::YearOutOfRange {
            field,
            year,
            min,
            max,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDateFormat { .. } => "INVALID_DATE_FORMAT",
            Self::InvalidCalendarDate { .. } => "INVALID_CALENDAR_DATE",
            Self::YearOutOfRange { .. } => "YEAR_OUT_OF_RANGE",
        }
    }

    /// Name of the request field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidDateFormat { field, .. } | Self::YearOutOfRange { field, .. } => {
                Some(field)
            }
            Self::InvalidCalendarDate { .. } => None,
        }
    }
}
