//! Antardasha year number for a given calendar year.

use super::reduction::reduce;
use crate::error::NumerologyResult;
use crate::models::{day_lord_code_of, BirthDate};

/// Year number for `year`, combining the reduced year, reduced birth month,
/// the day lord of that year's birthday, and the basic number.
///
/// Fails with `InvalidCalendarDate` when the birthday does not exist in
/// `year` (29 February in a common year).
pub fn antardasha_year_number(year: i32, dob: &BirthDate, basic: u32) -> NumerologyResult<u32> {
    let birthday = dob.anniversary_in(year)?;

    let year_part = reduce(year.rem_euclid(100) as u32, false);
    let month_part = reduce(dob.month(), false);
    let weekday_part = day_lord_code_of(birthday);

    Ok(reduce(year_part + month_part + weekday_part + basic, false))
}
