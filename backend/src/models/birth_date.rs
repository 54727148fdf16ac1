use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{NumerologyError, NumerologyResult};

/// Input format accepted for every date parameter (`DD-MM-YYYY`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Earliest supported birth year (inclusive).
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Latest supported birth year (inclusive).
pub const MAX_BIRTH_YEAR: i32 = 2100;

/// Parse a `DD-MM-YYYY` string into a calendar date.
///
/// `field` names the request parameter and ends up in the error.
pub fn parse_date(field: &'static str, input: &str) -> NumerologyResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|e| NumerologyError::invalid_format(field, input, e.to_string()))
}

/// A validated date of birth.
///
/// The year is always within [`MIN_BIRTH_YEAR`, `MAX_BIRTH_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Wrap a calendar date, rejecting years outside the supported range.
    pub fn new(date: NaiveDate) -> NumerologyResult<Self> {
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&date.year()) {
            return Err(NumerologyError::invalid_format(
                "dob",
                date.format(DATE_FORMAT).to_string(),
                format!(
                    "year must be between {} and {}",
                    MIN_BIRTH_YEAR, MAX_BIRTH_YEAR
                ),
            ));
        }
        Ok(Self(date))
    }

    /// Build from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> NumerologyResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| NumerologyError::invalid_calendar_date(year, month, day))?;
        Self::new(date)
    }

    /// Parse and validate a `DD-MM-YYYY` date of birth.
    pub fn parse(input: &str) -> NumerologyResult<Self> {
        let date = parse_date("dob", input)?;
        Self::new(date).map_err(|_| {
            NumerologyError::invalid_format(
                "dob",
                input,
                format!(
                    "year must be between {} and {}",
                    MIN_BIRTH_YEAR, MAX_BIRTH_YEAR
                ),
            )
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The birthday (same day and month) falling in `year`.
    ///
    /// Fails for 29 February in a non-leap year.
    pub fn anniversary_in(&self, year: i32) -> NumerologyResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .ok_or_else(|| NumerologyError::invalid_calendar_date(year, self.month(), self.day()))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
